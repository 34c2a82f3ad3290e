//! User-facing notification text (pt-BR, the widget's single locale).

pub const EMPTY_URL: &str = "Digite uma URL válida";
pub const INVALID_URL: &str = "URL inválida. Tente: google.com ou https://google.com";
pub const LOAD_SUCCESS: &str = "Site carregado com sucesso!";
pub const LOAD_ERROR: &str = "Erro ao carregar o site. Verifique a URL.";
pub const REFRESHED: &str = "Página atualizada!";
pub const NO_URL_TO_REFRESH: &str = "Nenhuma URL carregada para atualizar";
pub const NO_PAGE_TITLE: &str = "sem página";
