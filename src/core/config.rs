//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default timeout for forwarded backend requests
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the clinic backend that serves `/api/*`
    /// Example: http://localhost:8080
    pub backend_url: Option<String>,

    /// Timeout for forwarded requests, in seconds
    pub backend_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("BACKEND_TIMEOUT_SECS").ok(),
        )
    }

    /// Build a config from raw variable values
    pub fn from_values(backend_url: Option<String>, timeout: Option<String>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let backend_timeout_secs = timeout
            .and_then(|value| value.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Self {
            backend_url,
            backend_timeout_secs,
        }
    }

    /// Check if a backend is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_values() {
        let config = Config::from_values(
            Some("http://localhost:8080".to_string()),
            Some("30".to_string()),
        );

        assert_eq!(config.backend_url, Some("http://localhost:8080".to_string()));
        assert_eq!(config.backend_timeout_secs, 30);
        assert_eq!(config.backend_timeout(), Duration::from_secs(30));
        assert!(config.has_backend());
    }

    #[test]
    fn test_config_with_no_values() {
        let config = Config::from_values(None, None);

        assert!(config.backend_url.is_none());
        assert!(!config.has_backend());
        assert_eq!(config.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::from_values(Some(" https://api.clinic.test/ ".to_string()), None);
        assert_eq!(
            config.backend_url.as_deref(),
            Some("https://api.clinic.test")
        );
    }

    #[test]
    fn test_blank_backend_is_unset() {
        let config = Config::from_values(Some("   ".to_string()), None);
        assert!(!config.has_backend());
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["abc", "0", "-5", ""] {
            let config = Config::from_values(None, Some(raw.to_string()));
            assert_eq!(
                config.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS,
                "{raw}"
            );
        }
    }
}
