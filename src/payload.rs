use serde::Serialize;
use serde_json::{Map, Value};

/// Body relayed verbatim from the recommendation service.
///
/// Numbers keep their original digits (`arbitrary_precision`), so ids wider than 64 bits survive the relay.
pub type RecommendationPayload = Map<String, Value>;

pub const SERVICE_UNAVAILABLE_ERROR: &str = "Recommendation service unavailable";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Please make sure the Python API is running on port 5001";

/// Returned in place of a recommendation whenever the downstream call fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackPayload {
    pub error: &'static str,
    pub message: &'static str,
}

impl Default for FallbackPayload {
    fn default() -> Self {
        Self {
            error: SERVICE_UNAVAILABLE_ERROR,
            message: SERVICE_UNAVAILABLE_MESSAGE,
        }
    }
}
