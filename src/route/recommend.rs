use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{info, warn};

use crate::ServerState;
use crate::payload::FallbackPayload;
use crate::request_id::request_id_of;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub movie: String,
}

/// Relays the recommendation service's answer for `movie`.
///
/// Always answers 200: any downstream failure is replaced by [`FallbackPayload`],
/// so callers tell failures apart by the presence of an `error` key.
pub async fn recommend(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Query(query): Query<RecommendQuery>,
) -> Response {
    let request_id = request_id_of(&headers);

    match state
        .client
        .recommend(state.recommender_url.clone(), query.movie, request_id)
        .await
    {
        Ok(payload) => {
            info!("Recommendations relayed from {}", state.recommender_url);
            Json(payload).into_response()
        }
        Err(err) => {
            warn!("Recommendation request failed: {err}");
            Json(FallbackPayload::default()).into_response()
        }
    }
}
