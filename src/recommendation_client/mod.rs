pub mod error;
pub mod recommendation_client;
pub mod reqwest_recommendation_client;
