use crate::config::Config;
use crate::error::{Error, Result};
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Constants for API paths
pub mod api_paths {
    /// Path for requesting a presigned upload URL
    pub const SIGNED_URL: &str = "/api/files/aws-presigned";
    /// Path for submitting a social media link
    pub const SOCIAL_MEDIA: &str = "/api/files/social";
    /// Path for retrieving media results
    pub const MEDIA_RESULT: &str = "/api/media/users";

    /// Result-fetch path for a specific request ID
    pub fn media_result(request_id: &str) -> String {
        format!("{MEDIA_RESULT}/{request_id}")
    }
}

/// HTTP client for making API requests.
///
/// The underlying transport is established lazily by [`ensure_session`]
/// on the first request and reused for the lifetime of the client.
///
/// [`ensure_session`]: HttpClient::ensure_session
pub struct HttpClient {
    session: OnceCell<ReqwestClient>,
    config: Config,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            session: OnceCell::new(),
            config,
        })
    }

    /// Establish or validate the transport session. Idempotent; the session
    /// is built once and reused by every subsequent call.
    pub async fn ensure_session(&self) -> Result<&ReqwestClient> {
        if self.config.api_key.trim().is_empty() {
            return Err(Error::Unauthorized("API key is required".to_string()));
        }

        self.session
            .get_or_try_init(|| async {
                debug!("establishing HTTP session");
                ClientBuilder::new()
                    .user_agent(concat!("veridetect-rust-sdk/", env!("CARGO_PKG_VERSION")))
                    .timeout(Duration::from_secs(self.config.get_timeout_seconds()))
                    .build()
                    .map_err(Error::from)
            })
            .await
    }

    /// Make a GET request to the specified endpoint
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let session = self.ensure_session().await?;
        let url = format!("{}{}", self.config.get_base_url(), endpoint);
        debug!("GET {endpoint}");

        let response = session
            .get(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request with JSON data to the specified endpoint
    pub async fn post<T: DeserializeOwned, D: Serialize>(
        &self,
        endpoint: &str,
        data: &D,
    ) -> Result<T> {
        let session = self.ensure_session().await?;
        let url = format!("{}{}", self.config.get_base_url(), endpoint);
        debug!("POST {endpoint}");

        let response = session
            .post(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Accept", "application/json")
            .json(data)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// PUT raw bytes to a presigned URL. The API key header is deliberately
    /// omitted: the URL itself carries the authorization.
    pub async fn put_signed(&self, url: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        let session = self.ensure_session().await?;
        debug!("PUT {} bytes to signed URL", data.len());

        let response = session
            .put(url)
            .header("Content-Type", content_type)
            .header("Content-Length", data.len().to_string())
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UploadFailed(format!(
                "Signed URL upload failed. Status: {status} Body: {body}"
            )));
        }

        Ok(())
    }

    /// Map API responses onto the SDK error taxonomy and parse JSON bodies
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(serde_json::from_slice(&body)?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized(
                "Authentication failed: invalid API key".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(Error::NotFound("Resource not found".to_string())),
            _ if status.is_server_error() => {
                warn!("server error: HTTP {status}");
                Err(Error::ServerError(format!("Server error (HTTP {status})")))
            }
            _ => {
                // Try to surface the error message the API sent back
                let message = serde_json::from_slice::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|value| {
                        value
                            .get("error")
                            .and_then(|e| e.as_str())
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| format!("Unexpected response (HTTP {status})"));
                Err(Error::ServerError(message))
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.get_base_url())
            .finish_non_exhaustive()
    }
}
