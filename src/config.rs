use crate::error::{Error, Result};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.prd.veridetect.io";

/// Default interval between polling attempts, in milliseconds
pub const DEFAULT_POLLING_INTERVAL_MS: u64 = 2000;

/// Default overall polling timeout, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Configuration for the Veridetect client
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Timeout in seconds for HTTP requests
    pub timeout_seconds: Option<u64>,

    /// Default interval between polling attempts, in milliseconds
    pub polling_interval_ms: Option<u64>,

    /// Default overall polling timeout, in milliseconds
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Unauthorized("API key is required".to_string()));
        }

        if let Some(url) = &self.base_url {
            if url.trim().is_empty() {
                return Err(Error::InvalidConfig("Base URL cannot be empty".to_string()));
            }
        }

        if let Some(0) = self.polling_interval_ms {
            return Err(Error::InvalidConfig(
                "Polling interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the base URL, falling back to the default if not set
    pub fn get_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get the HTTP timeout in seconds, falling back to the default if not set
    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(30)
    }

    /// Get the polling interval in milliseconds, falling back to the default
    pub fn get_polling_interval_ms(&self) -> u64 {
        self.polling_interval_ms
            .unwrap_or(DEFAULT_POLLING_INTERVAL_MS)
    }

    /// Get the overall polling timeout in milliseconds, falling back to the default
    pub fn get_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}
