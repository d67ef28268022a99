use crate::models::{
    AnalysisResponse, DetectionResult, ModelResult, PredictionValue, ANALYZING_STATUS,
    NOT_APPLICABLE_STATUS,
};

/// Normalize a raw analysis response into a [`DetectionResult`].
///
/// Pure and deterministic: no I/O, no hidden state. Field access degrades to
/// `None`/empty instead of failing, because the upstream response shape
/// varies across model types and completion states.
///
/// - `status` is the summary status passed through verbatim. A response with
///   no summary (or no status in it) maps to `"ANALYZING"`: the job has not
///   produced a summary yet.
/// - The top-level score arrives on a 0-100 scale in
///   `resultsSummary.metadata.finalScore` and is divided by 100. Model
///   prediction numbers already arrive on a 0-1 scale and are used as-is.
/// - Models whose status is `"NOT_APPLICABLE"` are dropped; the rest keep
///   their input order.
pub fn normalize_result(raw: &AnalysisResponse) -> DetectionResult {
    let status = raw
        .results_summary
        .as_ref()
        .and_then(|summary| summary.status.clone())
        .unwrap_or_else(|| ANALYZING_STATUS.to_string());

    let score = raw
        .results_summary
        .as_ref()
        .and_then(|summary| summary.metadata.as_ref())
        .and_then(|metadata| metadata.get("finalScore"))
        .and_then(|value| value.as_f64())
        .map(|final_score| final_score / 100.0);

    let models = raw
        .models
        .iter()
        .filter(|model| model.status != NOT_APPLICABLE_STATUS)
        .map(|model| ModelResult {
            name: model.name.clone(),
            status: model.status.clone(),
            score: match model.prediction_number {
                Some(PredictionValue::Score(value)) => Some(value),
                _ => None,
            },
        })
        .collect();

    DetectionResult {
        status,
        score,
        models,
    }
}
