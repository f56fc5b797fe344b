//! Build-time configuration.

use catalog_api::{LOGIN_ROUTE, PROFILE_ENDPOINT, TOKEN_STORAGE_KEY};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prepended to every endpoint path.
    pub base_url: String,
    pub token_key: &'static str,
    pub login_route: &'static str,
    pub profile_endpoint: &'static str,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_key: TOKEN_STORAGE_KEY,
            login_route: LOGIN_ROUTE,
            profile_endpoint: PROFILE_ENDPOINT,
        }
    }

    /// Reads `CATALOG_API_BASE_URL` at compile time, the browser has no
    /// environment of its own.
    pub fn from_env() -> Self {
        Self::new(base_url_or_default(option_env!("CATALOG_API_BASE_URL")))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn base_url_or_default(var: Option<&str>) -> &str {
    match var.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_BASE_URL,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn falls_back_to_development_url() {
        assert_eq!(base_url_or_default(None), DEFAULT_BASE_URL);
        assert_eq!(base_url_or_default(Some("  ")), DEFAULT_BASE_URL);
    }

    #[test]
    fn strips_trailing_slash() {
        assert_eq!(
            base_url_or_default(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }

    #[test]
    fn defaults_match_backend() {
        let config = Config::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.profile_endpoint, "/api/auth/profile");
    }
}
