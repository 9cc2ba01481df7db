use async_trait::async_trait;
use reqwest::Url;

use crate::payload::RecommendationPayload;
use crate::recommendation_client::error::RecommendationClientError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Asks the service at `url` for recommendations similar to `movie`.
    async fn recommend(
        &self,
        url: Url,
        movie: String,
        request_id: String,
    ) -> Result<RecommendationPayload, RecommendationClientError>;
}
