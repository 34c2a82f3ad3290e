//! Local content serving via custom protocol.
//!
//! Registers a `palmview://` custom protocol so the shell WebView can load
//! the bundled chrome without a local HTTP server. The three shell assets
//! are compiled into the binary and registered as overrides; a base
//! directory can be set for development so edited assets win over the
//! bundled copies.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The device-chrome document.
const SHELL_INDEX: &str = include_str!("../../../assets/shell/index.html");
/// Chrome styling, including the toast transitions.
const SHELL_CSS: &str = include_str!("../../../assets/shell/shell.css");
/// Chrome behavior: event forwarding and command handling.
const SHELL_JS: &str = include_str!("../../../assets/shell/shell.js");

/// Serves shell assets from in-memory overrides, falling back to an
/// optional base directory on disk.
pub struct ContentProvider {
    /// Optional directory whose files shadow the bundled assets.
    base_dir: Option<PathBuf>,
    /// In-memory assets: path -> (mime, data).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// Create a provider preloaded with the bundled shell assets.
    pub fn bundled() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        provider.add_override("index.html", "text/html", SHELL_INDEX.as_bytes());
        provider.add_override("shell.css", "text/css", SHELL_CSS.as_bytes());
        provider.add_override("shell.js", "application/javascript", SHELL_JS.as_bytes());
        provider
    }

    /// Shadow the bundled assets with files under `base_dir`.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        // Development overrides from disk win over the bundled copies
        if let Some(found) = self.resolve_from_disk(clean) {
            return Some(found);
        }

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        None
    }

    fn resolve_from_disk(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        // Canonicalize both paths to resolve symlinks, `..`, etc.
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    /// The development base directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_resolve() {
        let cp = ContentProvider::bundled();
        for (path, mime) in [
            ("index.html", "text/html"),
            ("shell.css", "text/css"),
            ("shell.js", "application/javascript"),
        ] {
            let (m, data) = cp.resolve(path).unwrap_or_else(|| panic!("{path} missing"));
            assert_eq!(m.as_ref(), mime);
            assert!(!data.is_empty());
        }
    }

    #[test]
    fn empty_path_serves_index() {
        let cp = ContentProvider::bundled();
        let (mime, data) = cp.resolve("").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("<html"));
    }

    #[test]
    fn leading_slash_is_stripped() {
        let cp = ContentProvider::bundled();
        assert!(cp.resolve("/shell.js").is_some());
    }

    #[test]
    fn unknown_asset_is_none() {
        let cp = ContentProvider::bundled();
        assert!(cp.resolve("nope.wasm").is_none());
    }

    #[test]
    fn bundled_index_references_companion_assets() {
        let cp = ContentProvider::bundled();
        let (_, data) = cp.resolve("index.html").unwrap();
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("shell.css"));
        assert!(html.contains("shell.js"));
    }

    #[test]
    fn disk_override_shadows_bundled_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shell.css"), b"body{}").unwrap();

        let cp = ContentProvider::bundled().with_base_dir(dir.path());
        let (mime, data) = cp.resolve("shell.css").unwrap();
        assert_eq!(mime.as_ref(), "text/css");
        assert_eq!(data.as_ref(), b"body{}");
    }

    #[test]
    fn traversal_outside_base_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cp = ContentProvider::bundled().with_base_dir(dir.path());
        // Canonicalization guard: escapes resolve to None, not file contents
        assert!(cp.resolve("../../../etc/passwd").is_none());
    }

    #[test]
    fn mime_mapping() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(
            mime_from_extension(Path::new("a.bin")),
            "application/octet-stream"
        );
    }
}
