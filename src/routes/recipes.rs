use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::ApiError;
use crate::models::{Recipe, SearchQuery, SearchResponse, SimilarResponse};
use crate::state::AppState;

/// GET /api/search - Search recipes through the configured data source.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state.source.search(&query).await.map_err(|e| {
        tracing::error!("Recipe search failed: {}", e);
        e
    })?;
    Ok(Json(SearchResponse { results }))
}

/// GET /api/cuisines/{cuisine}/recipes - Cuisine-restricted search.
pub async fn search_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state
        .source
        .search_cuisine(&cuisine, &query)
        .await
        .map_err(|e| {
            tracing::error!("Cuisine search failed for {}: {}", cuisine, e);
            e
        })?;
    Ok(Json(SearchResponse { results }))
}

/// GET /api/recipes/{id} - Full recipe record.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.source.recipe(id).await.map_err(|e| {
        tracing::error!("Failed to fetch recipe {}: {}", id, e);
        e
    })?;
    Ok(Json(recipe))
}

/// GET /api/recipes/{id}/similar - Similar-recipe summaries.
pub async fn get_similar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SimilarResponse>, ApiError> {
    let results = state.source.similar(id).await.map_err(|e| {
        tracing::error!("Failed to fetch similar recipes for {}: {}", id, e);
        e
    })?;
    Ok(Json(SimilarResponse { results }))
}
