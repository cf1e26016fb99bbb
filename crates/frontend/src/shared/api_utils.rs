//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API calls go to the page's
//! own origin. Under `trunk serve` the `/api/` prefix is proxied to the
//! backend (see Trunk.toml).

/// Get the base URL for API requests
///
/// Built from the current window location, port included.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    match location.host() {
        Ok(host) if !host.is_empty() => base_from_parts(&protocol, &host),
        _ => String::new(),
    }
}

/// `protocol` comes with its trailing colon and `host` with its port, as
/// `location.protocol` / `location.host` return them
pub fn base_from_parts(protocol: &str, host: &str) -> String {
    format!("{}//{}", protocol, host)
}

/// Join a base and an API path (the path should start with "/api/")
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/generate");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_keeps_the_page_port() {
        assert_eq!(
            base_from_parts("http:", "localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            base_from_parts("http:", "127.0.0.1:3000"),
            "http://127.0.0.1:3000"
        );
    }

    #[test]
    fn test_base_without_explicit_port() {
        assert_eq!(base_from_parts("https:", "example.com"), "https://example.com");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080", "/api/generate"),
            "http://localhost:8080/api/generate"
        );
        assert_eq!(
            join_url("https://example.com/", "/api/generate"),
            "https://example.com/api/generate"
        );
        // нет window: остаётся относительный путь того же origin
        assert_eq!(join_url("", "/api/generate"), "/api/generate");
    }
}
