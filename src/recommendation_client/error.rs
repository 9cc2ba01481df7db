#[derive(Debug, thiserror::Error)]
pub enum RecommendationClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,

    #[error("Recommendation service answered with status {0}")]
    DownstreamStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_decode(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: RecommendationClientErrorChecker> From<T> for RecommendationClientError {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            RecommendationClientError::Timeout
        } else if err.is_decode() {
            RecommendationClientError::MalformedResponse(err.error_string())
        } else {
            RecommendationClientError::Network(err.error_string())
        }
    }
}
