use std::io;
use thiserror::Error;

/// Custom result type for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Veridetect SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Authentication failure
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server error from the API
    #[error("API error: {0}")]
    ServerError(String),

    /// Invalid file
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// Upload failed
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Timed out waiting for a result
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Short error code from the fixed API vocabulary.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidConfig(_) => "invalid_config",
            Error::Unauthorized(_) => "unauthorized",
            Error::NotFound(_) => "not_found",
            Error::ServerError(_) => "server_error",
            Error::InvalidFile(_) => "invalid_file",
            Error::UploadFailed(_) => "upload_failed",
            Error::Timeout(_) => "timeout",
            Error::RequestError(_) | Error::IoError(_) | Error::JsonError(_) => "unknown",
        }
    }

    /// Whether this error already carries one of the SDK's domain kinds.
    ///
    /// Domain errors are propagated unchanged through upload and polling
    /// paths; everything else (transport, IO, JSON decoding) gets wrapped
    /// into [`Error::UploadFailed`] at the upload boundary.
    pub fn is_domain(&self) -> bool {
        !matches!(
            self,
            Error::RequestError(_) | Error::IoError(_) | Error::JsonError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use std::io;

    #[test]
    fn test_error_display() {
        let errors = [
            (
                Error::InvalidConfig("missing base URL".to_string()),
                "Invalid configuration: missing base URL",
            ),
            (
                Error::Unauthorized("invalid API key".to_string()),
                "Unauthorized: invalid API key",
            ),
            (
                Error::NotFound("no such request".to_string()),
                "Not found: no such request",
            ),
            (
                Error::ServerError("internal error".to_string()),
                "API error: internal error",
            ),
            (
                Error::InvalidFile("file not found".to_string()),
                "Invalid file: file not found",
            ),
            (
                Error::UploadFailed("connection error".to_string()),
                "Upload failed: connection error",
            ),
            (
                Error::Timeout("no result after 2 attempts".to_string()),
                "Timeout: no result after 2 attempts",
            ),
        ];

        for (error, expected_message) in errors {
            assert_eq!(error.to_string(), expected_message);
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::Unauthorized(String::new()).code(), "unauthorized");
        assert_eq!(Error::ServerError(String::new()).code(), "server_error");
        assert_eq!(Error::UploadFailed(String::new()).code(), "upload_failed");
        assert_eq!(Error::InvalidFile(String::new()).code(), "invalid_file");
        assert_eq!(Error::NotFound(String::new()).code(), "not_found");
        assert_eq!(Error::Timeout(String::new()).code(), "timeout");
    }

    #[test]
    fn test_domain_classification() {
        assert!(Error::NotFound("x".to_string()).is_domain());
        assert!(Error::Timeout("x".to_string()).is_domain());

        let io_error: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(!io_error.is_domain());
        assert_eq!(io_error.code(), "unknown");

        let json_error: Error = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert!(!json_error.is_domain());
    }
}
