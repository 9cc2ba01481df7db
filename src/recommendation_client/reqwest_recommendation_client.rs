use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::info;

use crate::payload::RecommendationPayload;
use crate::recommendation_client::{
    error::{RecommendationClientError, RecommendationClientErrorChecker},
    recommendation_client::RecommendationClient,
};
use crate::request_id::X_REQUEST_ID;

#[derive(Clone)]
pub struct ReqwestRecommendationClient {
    client: Client,
}

impl ReqwestRecommendationClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, RecommendationClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RecommendationClientError::from)?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl RecommendationClient for ReqwestRecommendationClient {
    async fn recommend(
        &self,
        url: Url,
        movie: String,
        request_id: String,
    ) -> Result<RecommendationPayload, RecommendationClientError> {
        info!("Requesting recommendations for {:?} from {}", movie, url);

        let response = self
            .client
            .get(url)
            .query(&[("movie", movie.as_str())])
            .header(X_REQUEST_ID, request_id)
            .send()
            .await
            .map_err(RecommendationClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationClientError::DownstreamStatus(status.as_u16()));
        }

        response
            .json::<RecommendationPayload>()
            .await
            .map_err(RecommendationClientError::from)
    }
}

impl RecommendationClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_decode(&self) -> bool {
        self.is_decode()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}
