use std::time::Duration;

use clap::{Parser, command};
use reqwest::Url;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, env = "GATEWAY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Endpoint of the recommendation service; `movie` is appended as a query parameter.
    #[arg(
        short,
        long,
        env = "RECOMMENDER_URL",
        default_value = "http://localhost:5001/recommend"
    )]
    pub recommender_url: Url,

    #[arg(short, long, env = "RECOMMENDER_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,
}

impl CliArguments {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
