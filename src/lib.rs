pub mod cli_arguments;
pub mod payload;
pub mod recommendation_client;
pub mod request_id;
pub mod route;

use std::sync::Arc;

use axum::extract::Request;
use axum::{Router, routing::get};
use reqwest::Url;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};

use crate::recommendation_client::recommendation_client::RecommendationClient;
use crate::request_id::{GatewayRequestId, UNKNOWN_REQUEST_ID, X_REQUEST_ID};
use crate::route::recommend::recommend;

#[derive(Clone)]
pub struct ServerState {
    pub client: Arc<dyn RecommendationClient + Send + Sync>,
    pub recommender_url: Url,
}

pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .route("/api/movies/recommend", get(recommend))
        .with_state(server_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or(UNKNOWN_REQUEST_ID);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            GatewayRequestId::default(),
        ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use reqwest::Url;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::payload::RecommendationPayload;
    use crate::recommendation_client::recommendation_client::MockRecommendationClient;
    use crate::{ServerState, router};

    fn build_router_with_mock(response: Value) -> axum::Router {
        let mut mock = MockRecommendationClient::default();
        let payload: RecommendationPayload = response.as_object().cloned().unwrap_or_default();

        mock.expect_recommend()
            .withf(|_, _, request_id| request_id != "unknown")
            .returning(move |_, _, _| Ok(payload.clone()));

        router(ServerState {
            client: Arc::new(mock),
            recommender_url: Url::parse("http://localhost:5001/recommend").unwrap(),
        })
    }

    #[tokio::test]
    async fn should_expose_the_recommend_endpoint() {
        let router = build_router_with_mock(json!({"recommendations": ["Memento"]}));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/movies/recommend?movie=Inception")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(body, json!({"recommendations": ["Memento"]}));
    }

    #[tokio::test]
    async fn should_reject_a_request_without_movie() {
        let router = build_router_with_mock(json!({}));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/movies/recommend")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_only_expose_the_recommend_route() {
        let router = build_router_with_mock(json!({}));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_enrich_response_headers_with_request_id() {
        let router = build_router_with_mock(json!({}));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/movies/recommend?movie=Inception")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();

        assert!(headers.get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let router = build_router_with_mock(json!({}));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/movies/recommend?movie=Inception")
                    .header("origin", "http://frontend.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
