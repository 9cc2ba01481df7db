use std::sync::Arc;

use clap::Parser;
use movie_gateway::cli_arguments::CliArguments;
use movie_gateway::recommendation_client::reqwest_recommendation_client::ReqwestRecommendationClient;
use movie_gateway::{ServerState, router};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let tcp_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!(
        "Server started on port {}, forwarding to {} (timeout {:?})",
        args.port,
        args.recommender_url,
        args.timeout()
    );

    let client = Arc::new(ReqwestRecommendationClient::with_timeout(args.timeout())?);

    let state = ServerState {
        client,
        recommender_url: args.recommender_url,
    };

    axum::serve(tcp_listener, router(state)).await?;

    Ok(())
}
