use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::EventEmitter;
use crate::http::HttpClient;
use crate::models::{
    BatchOptions, DetectionResult, GetResultOptions, PollOptions, UploadOptions, UploadResult,
};
use crate::polling::{attempts_for, fetch_result, poll_for_results, run_poll_loop};
use crate::upload::{upload_file, upload_social_link};
use futures::future;

/// Client for interacting with the Veridetect API
pub struct Client {
    http: HttpClient,
    emitter: EventEmitter,
    config: Config,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http,
            emitter: EventEmitter::new(),
            config,
        })
    }

    /// Register a handler for `result` events emitted by
    /// [`poll_for_results`](Client::poll_for_results).
    ///
    /// Register handlers before starting a poll; registration during an
    /// active poll is not guaranteed to observe that poll's outcome.
    pub fn on_result<F>(&self, handler: F)
    where
        F: Fn(&DetectionResult) + Send + Sync + 'static,
    {
        self.emitter.on_result(handler);
    }

    /// Register a handler for `error` events emitted by
    /// [`poll_for_results`](Client::poll_for_results)
    pub fn on_error<F>(&self, handler: F)
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.emitter.on_error(handler);
    }

    /// Upload a file for analysis
    pub async fn upload(&self, options: UploadOptions) -> Result<UploadResult> {
        upload_file(&self.http, &options.file_path).await
    }

    /// Submit a social media link for analysis
    pub async fn upload_social_media(&self, link: &str) -> Result<UploadResult> {
        upload_social_link(&self.http, link).await
    }

    /// Get the analysis result for a specific request ID.
    ///
    /// With no options this is a single fetch. When both `max_attempts` and
    /// `polling_interval` are set, the call waits for a terminal status
    /// using the same loop as [`poll_for_results`](Client::poll_for_results)
    /// and returns the result directly instead of emitting it.
    pub async fn get_result(
        &self,
        request_id: &str,
        options: Option<GetResultOptions>,
    ) -> Result<DetectionResult> {
        let opts = options.unwrap_or_default();
        match (opts.max_attempts, opts.polling_interval) {
            (Some(max_attempts), Some(interval)) if max_attempts > 0 && interval > 0 => {
                run_poll_loop(&self.http, request_id, interval, max_attempts).await
            }
            _ => fetch_result(&self.http, request_id).await,
        }
    }

    /// Poll for results, delivering the outcome through the registered
    /// event handlers rather than a return value.
    ///
    /// Exactly one terminal event fires per invocation: `result` on a
    /// terminal status, `error` on a permanent failure or timeout. The
    /// future resolves once that event has been dispatched; wrap the client
    /// in an `Arc` and `tokio::spawn` the call for fire-and-forget use.
    pub async fn poll_for_results(&self, request_id: &str, options: Option<PollOptions>) {
        let opts = options.unwrap_or_default();
        let interval = opts
            .polling_interval
            .unwrap_or_else(|| self.config.get_polling_interval_ms());
        let timeout = opts.timeout.unwrap_or_else(|| self.config.get_timeout_ms());
        let max_attempts = opts
            .max_attempts
            .unwrap_or_else(|| attempts_for(timeout, interval));

        poll_for_results(&self.http, &self.emitter, request_id, interval, max_attempts).await;
    }

    /// Upload a file and wait for its analysis to complete
    pub async fn detect_file(&self, file_path: &str) -> Result<DetectionResult> {
        let upload_result = self
            .upload(UploadOptions {
                file_path: file_path.to_string(),
            })
            .await?;

        let interval = self.config.get_polling_interval_ms();
        let max_attempts = attempts_for(self.config.get_timeout_ms(), interval);
        run_poll_loop(&self.http, &upload_result.request_id, interval, max_attempts).await
    }

    /// Upload and analyze a batch of files with bounded concurrency.
    ///
    /// Returns one entry per input path, in input order; individual files
    /// fail independently.
    pub async fn detect_batch(
        &self,
        file_paths: Vec<&str>,
        options: BatchOptions,
    ) -> Vec<Result<DetectionResult>> {
        if file_paths.is_empty() {
            return Vec::new();
        }

        let max_concurrency = options.max_concurrency.unwrap_or(5).max(1);
        let interval = options
            .polling_interval
            .unwrap_or_else(|| self.config.get_polling_interval_ms());
        let max_attempts = options
            .max_attempts
            .unwrap_or_else(|| attempts_for(self.config.get_timeout_ms(), interval));

        let mut results = Vec::with_capacity(file_paths.len());
        for chunk in file_paths.chunks(max_concurrency) {
            let chunk_futures = chunk.iter().map(|&path| async move {
                let upload_result = upload_file(&self.http, path).await?;
                run_poll_loop(&self.http, &upload_result.request_id, interval, max_attempts).await
            });
            results.extend(future::join_all(chunk_futures).await);
        }

        results
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}
