use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use clap::Parser;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 5001)]
    port: u16,
}

#[derive(Deserialize)]
struct RecommendQuery {
    movie: Option<String>,
}

const CATALOGUE: &[(&str, &str, f64, &str)] = &[
    ("Inception", "Action Science Fiction Adventure", 8.4, "2010-07-15"),
    ("Interstellar", "Adventure Drama Science Fiction", 8.4, "2014-11-05"),
    ("Memento", "Mystery Thriller", 8.2, "2000-10-11"),
    ("The Prestige", "Drama Mystery Science Fiction", 8.2, "2006-10-17"),
    ("Tenet", "Action Thriller Science Fiction", 7.2, "2020-08-22"),
];

fn find_title(movie: &str) -> Option<&'static str> {
    let needle = movie.to_lowercase();

    CATALOGUE
        .iter()
        .map(|(title, ..)| *title)
        .find(|title| title.to_lowercase() == needle)
        .or_else(|| {
            CATALOGUE
                .iter()
                .map(|(title, ..)| *title)
                .find(|title| title.to_lowercase().contains(&needle))
        })
}

fn recommendations_for(matched: &str) -> Vec<Value> {
    CATALOGUE
        .iter()
        .filter(|(title, ..)| *title != matched)
        .map(|(title, genres, vote_average, release_date)| {
            json!({
                "title": title,
                "genres": genres,
                "vote_average": vote_average,
                "release_date": release_date,
            })
        })
        .collect()
}

fn suggestions_for(movie: &str) -> Vec<&'static str> {
    let first = movie.chars().next().map(|c| c.to_ascii_lowercase());

    CATALOGUE
        .iter()
        .map(|(title, ..)| *title)
        .filter(|title| title.chars().next().map(|c| c.to_ascii_lowercase()) == first)
        .take(3)
        .collect()
}

async fn recommend(headers: HeaderMap, Query(query): Query<RecommendQuery>) -> impl IntoResponse {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    println!("Request received {} for {:?}", request_id, query.movie);

    let Some(movie) = query.movie.filter(|movie| !movie.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Movie parameter is required"})),
        );
    };

    match find_title(&movie) {
        Some(matched) => (
            StatusCode::OK,
            Json(json!({
                "input_movie": movie,
                "matched_movie": matched,
                "recommendations": recommendations_for(matched),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No movie found similar to '{movie}'"),
                "suggestions": suggestions_for(&movie),
                "message": "Try searching for one of these similar titles instead.",
            })),
        ),
    }
}

async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "Movie Recommendation API",
        "endpoints": {
            "/recommend": "GET - Get recommendations (param: movie)"
        }
    }))
}

fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/recommend", get(recommend))
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .unwrap();
    axum::serve(listener, router()).await.unwrap();
}
