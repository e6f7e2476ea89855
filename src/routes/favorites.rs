use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{
    FavoriteStatusResponse, FavoritesResponse, MutateFavoritesResponse, Recipe,
};
use crate::state::AppState;

/// GET /api/favorites - Current favorite set in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        favorites: state.store.favorites(),
    })
}

/// POST /api/favorites - Add a recipe to the favorite set.
/// A recipe whose id is already present leaves the set unchanged.
pub async fn create(State(state): State<AppState>, Json(recipe): Json<Recipe>) -> Response {
    if recipe.id <= 0 {
        return (StatusCode::BAD_REQUEST, "A positive recipe id is required").into_response();
    }

    let created = state.store.add_favorite(recipe);
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(MutateFavoritesResponse {
            status: if created { "created" } else { "exists" },
            favorites: state.store.favorites(),
        }),
    )
        .into_response()
}

/// GET /api/favorites/{id} - Favorite membership query.
pub async fn membership(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<FavoriteStatusResponse> {
    Json(FavoriteStatusResponse {
        id,
        favorite: state.store.is_favorite(id),
    })
}

/// DELETE /api/favorites/{id} - Remove a recipe; an absent id is a no-op.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<MutateFavoritesResponse> {
    let removed = state.store.remove_favorite(id);
    Json(MutateFavoritesResponse {
        status: if removed { "removed" } else { "missing" },
        favorites: state.store.favorites(),
    })
}
