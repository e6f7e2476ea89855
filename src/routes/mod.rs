pub mod favorites;
pub mod recipes;
pub mod shopping;

use axum::{
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Index page
        .route("/", get(index))
        // Recipe data source queries
        .route("/api/search", get(recipes::search))
        .route("/api/cuisines/{cuisine}/recipes", get(recipes::search_cuisine))
        .route("/api/recipes/{id}", get(recipes::get_recipe))
        .route("/api/recipes/{id}/similar", get(recipes::get_similar))
        // Favorite set
        .route("/api/favorites", get(favorites::list))
        .route("/api/favorites", post(favorites::create))
        .route("/api/favorites/{id}", get(favorites::membership))
        .route("/api/favorites/{id}", delete(favorites::remove))
        // Shopping list
        .route("/api/shopping-list", get(shopping::list))
        .route("/api/shopping-list", post(shopping::create))
        .route("/api/shopping-list/{id}/toggle", post(shopping::toggle))
        .route("/api/shopping-list/{id}", delete(shopping::remove))
        // Health check
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}

async fn health() -> &'static str {
    "OK"
}
