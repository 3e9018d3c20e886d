//! Validation for declared path fields.
//!
//! `base` must be a URL path prefix; `asset_prefix` is either the `.` token
//! (rewrite assets relative to the emitting page) or a fixed prefix, which
//! may be a full CDN URL.

use std::sync::LazyLock;

use regex::Regex;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").expect("Invalid scheme regex"));

/// Validate a declared base path. Empty is valid.
pub fn validate_base_path(value: &str) -> Result<(), String> {
    if value.chars().any(char::is_whitespace) {
        return Err("must not contain unencoded whitespace (use %20)".to_string());
    }

    if SCHEME_RE.is_match(value) {
        return Err("must be a URL path prefix, not a full URL".to_string());
    }

    if value.starts_with("//") {
        return Err("must not be protocol-relative".to_string());
    }

    Ok(())
}

/// Validate a declared asset prefix.
///
/// `.` is the page-relative token. Other dot-relative forms have no defined
/// rewrite semantics and are rejected. Fixed prefixes may carry a scheme,
/// for CDN-hosted assets.
pub fn validate_asset_prefix(value: &str) -> Result<(), String> {
    if value == "." {
        return Ok(());
    }

    if value.chars().any(char::is_whitespace) {
        return Err("must not contain unencoded whitespace (use %20)".to_string());
    }

    if value == ".." || value.starts_with("./") || value.starts_with("../") {
        return Err("only \".\" is supported as a relative prefix".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_base_paths() {
        assert!(validate_base_path("").is_ok());
        assert!(validate_base_path("/docs").is_ok());
        assert!(validate_base_path("/docs/v2").is_ok());
        assert!(validate_base_path("docs").is_ok());
    }

    #[test]
    fn rejects_base_paths_with_whitespace() {
        let err = validate_base_path("/my docs").unwrap_err();

        assert!(err.contains("whitespace"));
        assert!(validate_base_path("/docs\t").is_err());
        assert!(validate_base_path(" /docs").is_err());
    }

    #[test]
    fn rejects_full_urls_as_base_paths() {
        let err = validate_base_path("https://example.com/docs").unwrap_err();

        assert!(err.contains("not a full URL"));
    }

    #[test]
    fn rejects_protocol_relative_base_paths() {
        let err = validate_base_path("//example.com/docs").unwrap_err();

        assert!(err.contains("protocol-relative"));
    }

    #[test]
    fn accepts_the_page_relative_token() {
        assert!(validate_asset_prefix(".").is_ok());
    }

    #[test]
    fn accepts_fixed_and_cdn_prefixes() {
        assert!(validate_asset_prefix("").is_ok());
        assert!(validate_asset_prefix("/assets").is_ok());
        assert!(validate_asset_prefix("https://cdn.example.com").is_ok());
    }

    #[test]
    fn rejects_other_relative_prefixes() {
        assert!(validate_asset_prefix("./assets").is_err());
        assert!(validate_asset_prefix("..").is_err());
        assert!(validate_asset_prefix("../assets").is_err());
    }

    #[test]
    fn rejects_asset_prefixes_with_whitespace() {
        assert!(validate_asset_prefix("https://cdn.example.com/my assets").is_err());
    }
}
