use serde::{Deserialize, Serialize};

/// Status value the API reports while a detection job is still in progress.
///
/// Any other status, including values this SDK has never seen, is treated as
/// terminal by the polling loop.
pub const ANALYZING_STATUS: &str = "ANALYZING";

/// Model status excluded from normalized results
pub const NOT_APPLICABLE_STATUS: &str = "NOT_APPLICABLE";

/// Request body for a social media link submission
#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkRequest {
    /// Link to the social media post to analyze
    #[serde(rename = "socialLink")]
    pub social_link: String,
}

/// Request body for registering a file upload
#[derive(Debug, Clone, Serialize)]
pub struct SignedUrlRequest {
    /// Name of the file being uploaded
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// Response to an upload registration or social link submission.
///
/// The API decouples metadata registration from payload transfer: for file
/// uploads the `response.signedUrl` field carries a pre-authorized address
/// the raw bytes are PUT to. Social link submissions return only a
/// `requestId`. Every field is optional on the wire; missing identifiers are
/// rejected by the upload coordinator, not the decoder.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Unique identifier for the upload request
    #[serde(default)]
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,

    /// Unique identifier for the media
    #[serde(default)]
    #[serde(rename = "mediaId")]
    pub media_id: Option<String>,

    /// Response details containing the signed URL, if any
    #[serde(default)]
    pub response: Option<SignedUrlDetails>,
}

/// Details of the signed URL response
#[derive(Debug, Clone, Deserialize)]
pub struct SignedUrlDetails {
    /// The presigned URL for uploading
    #[serde(default)]
    #[serde(rename = "signedUrl")]
    pub signed_url: Option<String>,
}

/// Result of an upload operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Unique identifier for the upload request
    pub request_id: String,

    /// Unique identifier for the media; always `None` for social links
    pub media_id: Option<String>,
}

/// A model's prediction value as it appears on the wire.
///
/// Models that ran report a plain number (already on a 0-1 scale). Models
/// that declined to evaluate report an object such as
/// `{"reason": "...", "decision": "NOT_EVALUATED"}` instead.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PredictionValue {
    /// Numeric prediction, 0-1 scale
    Score(f64),
    /// Structured non-evaluation marker
    Unevaluated(serde_json::Map<String, serde_json::Value>),
}

/// Per-model entry of a raw analysis response
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    /// Name of the detection model
    #[serde(default)]
    pub name: String,

    /// Status reported by the model
    #[serde(default)]
    pub status: String,

    /// Prediction value; number when evaluated, object otherwise
    #[serde(default)]
    #[serde(rename = "predictionNumber")]
    pub prediction_number: Option<PredictionValue>,

    /// Model-level final score (0-100 scale, unused by normalization)
    #[serde(default)]
    #[serde(rename = "finalScore")]
    pub final_score: Option<f64>,
}

/// Summary block of a raw analysis response
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsSummary {
    /// Overall status of the analysis
    #[serde(default)]
    pub status: Option<String>,

    /// Metadata containing the final score and other information
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Raw analysis response as returned by the result endpoint.
///
/// The shape varies across model types and completion states, so every
/// field degrades to absent rather than failing to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    /// Results summary containing status and metadata
    #[serde(default)]
    #[serde(rename = "resultsSummary")]
    pub results_summary: Option<ResultsSummary>,

    /// Array of model-specific results
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// Normalized per-model result
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResult {
    /// Name of the model
    pub name: String,

    /// Status of the detection
    pub status: String,

    /// Detection score (0-1 range, `None` when the model did not evaluate)
    pub score: Option<f64>,
}

/// Normalized detection result
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Overall status (ARTIFICIAL, AUTHENTIC, ANALYZING, ...), passed
    /// through from the API verbatim
    pub status: String,

    /// Overall confidence score (0-1 range, `None` while processing)
    pub score: Option<f64>,

    /// Results from individual detection models, in API order
    pub models: Vec<ModelResult>,
}

/// Options for uploading a file
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Path to the file to upload
    pub file_path: String,
}

/// Options for getting a result
#[derive(Debug, Clone, Default)]
pub struct GetResultOptions {
    /// Maximum number of attempts to get results
    pub max_attempts: Option<u64>,

    /// How long to wait between attempts, in milliseconds
    pub polling_interval: Option<u64>,
}

/// Options controlling a polling run
#[derive(Debug, Clone, Default)]
pub struct PollOptions {
    /// Interval between attempts in milliseconds
    pub polling_interval: Option<u64>,

    /// Overall timeout in milliseconds; the attempt cap is derived from
    /// this and the interval unless `max_attempts` is set explicitly
    pub timeout: Option<u64>,

    /// Explicit attempt cap, overriding the derived one
    pub max_attempts: Option<u64>,
}

/// Options for batch detection
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of concurrent uploads and polls
    pub max_concurrency: Option<usize>,

    /// Maximum number of attempts per file
    pub max_attempts: Option<u64>,

    /// How long to wait between attempts, in milliseconds
    pub polling_interval: Option<u64>,
}
