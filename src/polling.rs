use crate::error::{Error, Result};
use crate::events::EventEmitter;
use crate::http::{api_paths, HttpClient};
use crate::models::{AnalysisResponse, DetectionResult, ANALYZING_STATUS};
use crate::normalize::normalize_result;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Derive the attempt cap from an overall timeout and the polling interval,
/// rounding up so the last partial interval still gets an attempt.
pub(crate) fn attempts_for(timeout_ms: u64, interval_ms: u64) -> u64 {
    let interval_ms = interval_ms.max(1);
    timeout_ms.div_ceil(interval_ms).max(1)
}

/// Fetch a single result and normalize it, without waiting
pub(crate) async fn fetch_result(http: &HttpClient, request_id: &str) -> Result<DetectionResult> {
    let raw: AnalysisResponse = http.get(&api_paths::media_result(request_id)).await?;
    Ok(normalize_result(&raw))
}

/// Poll the result endpoint until the analysis reaches a terminal status.
///
/// The first attempt fires immediately; every later attempt is preceded by
/// one `interval_ms` sleep. Per attempt:
///
/// - a response whose status is anything other than `"ANALYZING"` is
///   terminal and is returned, unrecognized future statuses included --
///   better to deliver an unexpected result than to hang;
/// - `"ANALYZING"` means the job is still running, so the loop continues;
/// - a `not_found` error means the request has not propagated server-side
///   yet and is retried;
/// - any other error is permanent and returned at once.
///
/// Exhausting the attempt cap produces a `timeout` error.
pub(crate) async fn run_poll_loop(
    http: &HttpClient,
    request_id: &str,
    interval_ms: u64,
    max_attempts: u64,
) -> Result<DetectionResult> {
    for attempt in 0..max_attempts {
        if attempt > 0 {
            sleep(Duration::from_millis(interval_ms)).await;
        }

        match fetch_result(http, request_id).await {
            Ok(result) if result.status == ANALYZING_STATUS => {
                debug!(
                    "request {request_id} still analyzing (attempt {}/{max_attempts})",
                    attempt + 1
                );
            }
            Ok(result) => return Ok(result),
            Err(Error::NotFound(_)) => {
                debug!(
                    "request {request_id} not found yet (attempt {}/{max_attempts})",
                    attempt + 1
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(Error::Timeout(format!(
        "No result for request {request_id} after {max_attempts} attempts"
    )))
}

/// Poll for results and deliver the outcome through the emitter.
///
/// Exactly one terminal event fires per invocation: `result` when the
/// analysis completed, `error` on a permanent failure or when the attempt
/// cap runs out. Nothing is ever raised to the caller.
pub(crate) async fn poll_for_results(
    http: &HttpClient,
    emitter: &EventEmitter,
    request_id: &str,
    interval_ms: u64,
    max_attempts: u64,
) {
    match run_poll_loop(http, request_id, interval_ms, max_attempts).await {
        Ok(result) => emitter.emit_result(&result),
        Err(e) => emitter.emit_error(&e),
    }
}
