//! # Veridetect SDK
//!
//! The Veridetect SDK provides tools for detecting deepfakes and manipulated
//! media through the Veridetect API. Media is uploaded as a file or a social
//! media link, analyzed asynchronously server-side, and the heterogeneous
//! per-model responses are normalized into a uniform [`DetectionResult`].
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use veridetect::{Client, Config, GetResultOptions, UploadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize with API key
//!     let client = Client::new(Config {
//!         api_key: std::env::var("VERIDETECT_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     // Upload a file for analysis
//!     let upload_result = client.upload(UploadOptions {
//!         file_path: "./image.jpg".to_string(),
//!     }).await?;
//!
//!     // Wait for the analysis result
//!     let result = client.get_result(
//!         &upload_result.request_id,
//!         Some(GetResultOptions {
//!             max_attempts: Some(30),
//!             polling_interval: Some(2000),
//!         }),
//!     ).await?;
//!
//!     println!("Status: {}", result.status);
//!     if let Some(score) = result.score {
//!         println!("Score: {:.4} ({:.1}%)", score, score * 100.0);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Event-Driven Polling
//!
//! [`Client::poll_for_results`] never returns the outcome; it delivers it
//! through handlers registered up front. Exactly one terminal event fires
//! per poll, either `result` or `error`.
//!
//! ```no_run
//! use veridetect::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         api_key: std::env::var("VERIDETECT_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     let upload_result = client.upload_social_media(
//!         "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!     ).await?;
//!
//!     // Register handlers before polling starts
//!     client.on_result(|result| {
//!         println!("Status: {} (score: {:?})", result.status, result.score);
//!     });
//!     client.on_error(|error| {
//!         eprintln!("Analysis failed: {error}");
//!     });
//!
//!     client.poll_for_results(&upload_result.request_id, None).await;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod events;
mod file;
mod http;
mod models;
mod normalize;
mod polling;
mod upload;
mod utils;

// Re-exports
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_POLLING_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
pub use error::{Error, Result};
pub use events::EventEmitter;
pub use file::{FileInfo, FileTypeConfig, SUPPORTED_FILE_TYPES};
pub use models::{
    AnalysisResponse, BatchOptions, DetectionResult, GetResultOptions, ModelEntry, ModelResult,
    PollOptions, PredictionValue, ResultsSummary, UploadOptions, UploadResult, ANALYZING_STATUS,
    NOT_APPLICABLE_STATUS,
};
pub use normalize::normalize_result;
