//! URL normalization and validation for the preview frame.
//!
//! Validation runs in two stages: a strict parse that only admits the
//! `http`/`https` schemes, and a permissive domain-shaped pattern used
//! only when the strict parse fails outright. Both stages see the
//! normalized form, never the raw input.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Permissive fallback: optional scheme, dotted labels, a 2-6 character
/// final label, optional path.
const DOMAIN_PATTERN: &str = r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$";

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern is valid"))
}

/// Trim the raw input and prepend `https://` when no scheme prefix is
/// present. Returns `None` for empty (or whitespace-only) input.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Whether a normalized URL is acceptable for the frame.
///
/// A URL that parses strictly is judged by its scheme alone; the pattern
/// fallback only applies when parsing fails.
pub fn is_valid(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => domain_regex().is_match(candidate),
    }
}
