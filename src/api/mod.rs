pub mod error;
pub mod health;
pub mod movies;
pub mod response;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{database::Database, services::MovieQueryService};

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub movie_service: Arc<MovieQueryService>,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        let movie_service = MovieQueryService::new(database.repository().clone());
        Self {
            database,
            movie_service: Arc::new(movie_service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Movie Catalog API v1.0" }))
        .route("/api/health", get(health::health_check))
        // Movies
        .route("/movies/popular", get(movies::get_popular_movies))
        .route("/movies/search", get(movies::search_movies))
        .route("/movies/:id", get(movies::get_movie_by_id))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
