//! Configuration management for the PDF.co MCP Server
//!
//! Handles environment variables and configuration loading.

use std::time::Duration;

use crate::error::{ConfigError, PdfMcpError, Result};

/// Configuration for the PDF.co MCP Server
#[derive(Clone)]
pub struct Config {
    /// PDF.co API key, `None` when not provided
    pub api_key: Option<String>,

    /// Base URL of the PDF.co REST API
    pub api_base_url: String,

    /// Timeout applied to every outbound request
    pub request_timeout: Duration,
}

impl Config {
    /// Create a new configuration from the process environment
    pub fn new() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create a configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(pdfco::API_KEY_ENV);

        let api_base_url =
            lookup(pdfco::API_URL_ENV).unwrap_or_else(|| pdfco::API_BASE_URL.to_string());

        let timeout_secs = match lookup(pdfco::TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                PdfMcpError::Config(ConfigError::InvalidConfig {
                    message: format!("{} must be a whole number of seconds, got '{}'", pdfco::TIMEOUT_ENV, raw),
                })
            })?,
            None => pdfco::DEFAULT_TIMEOUT_SECS,
        };

        Self::from_parts(api_key, api_base_url, Duration::from_secs(timeout_secs))
    }

    /// Build a configuration from explicit values
    pub fn from_parts(
        api_key: Option<String>,
        api_base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(PdfMcpError::Config(ConfigError::InvalidConfig {
                message: format!("API URL must start with http:// or https://, got '{}'", api_base_url),
            }));
        }

        // Blank keys count as missing
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            api_key,
            api_base_url,
            request_timeout,
        })
    }

    /// Override the API base URL
    pub fn with_api_url(self, api_url: impl Into<String>) -> Result<Self> {
        Self::from_parts(self.api_key, api_url, self.request_timeout)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// PDF.co API constants
pub mod pdfco {
    /// Base URL for PDF.co API
    pub const API_BASE_URL: &str = "https://api.pdf.co/v1";

    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-api-key";

    pub const API_KEY_ENV: &str = "PDFCO_API_KEY";
    pub const API_URL_ENV: &str = "PDFCO_API_URL";
    pub const TIMEOUT_ENV: &str = "PDFCO_TIMEOUT_SECS";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Endpoint paths, relative to the base URL
    pub mod endpoints {
        pub const MERGE: &str = "/pdf/merge";
        pub const SPLIT: &str = "/pdf/split";
        pub const TO_TEXT: &str = "/pdf/convert/to/text";
        pub const TO_JSON: &str = "/pdf/convert/to/json";
        pub const FROM_HTML: &str = "/pdf/convert/from/html";
        pub const FROM_URL: &str = "/pdf/convert/from/url";
        pub const BALANCE: &str = "/account/credit/balance";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(!config.has_api_key());
        assert_eq!(config.api_base_url, pdfco::API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_variables_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (pdfco::API_KEY_ENV, "abc123"),
            (pdfco::API_URL_ENV, "http://localhost:4010/v1/"),
            (pdfco::TIMEOUT_ENV, " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.api_base_url, "http://localhost:4010/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = Config::from_lookup(lookup_from(&[(pdfco::TIMEOUT_ENV, "two minutes")]));
        match result {
            Err(PdfMcpError::Config(ConfigError::InvalidConfig { message })) => {
                assert!(message.contains(pdfco::TIMEOUT_ENV));
                assert!(message.contains("two minutes"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = Config::from_parts(Some("   ".to_string()), pdfco::API_BASE_URL, Duration::from_secs(5)).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::from_parts(Some("key".to_string()), "http://localhost:8080/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        assert!(config.has_api_key());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::from_parts(None, "api.pdf.co", Duration::from_secs(5));
        assert!(matches!(result, Err(PdfMcpError::Config(ConfigError::InvalidConfig { .. }))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_parts(Some("secret-key".to_string()), pdfco::API_BASE_URL, Duration::from_secs(5)).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("<redacted>"));
    }
}
