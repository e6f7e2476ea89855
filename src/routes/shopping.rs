use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{AddShoppingItemRequest, MutateShoppingListResponse, ShoppingListResponse};
use crate::state::AppState;

/// GET /api/shopping-list - Current shopping list in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<ShoppingListResponse> {
    Json(ShoppingListResponse {
        items: state.store.shopping_list(),
    })
}

/// POST /api/shopping-list - Add an ingredient to the shopping list.
/// An item whose id is already present leaves the list unchanged.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<AddShoppingItemRequest>,
) -> Response {
    if request.name.is_none() && request.original.is_none() {
        return (StatusCode::BAD_REQUEST, "name or original is required").into_response();
    }

    let (_, created) = state.store.add_shopping_item(request);
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(MutateShoppingListResponse {
            status: if created { "created" } else { "exists" },
            items: state.store.shopping_list(),
        }),
    )
        .into_response()
}

/// POST /api/shopping-list/{id}/toggle - Flip an item's checked flag.
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MutateShoppingListResponse> {
    let toggled = state.store.toggle_shopping_item(&id).is_some();
    Json(MutateShoppingListResponse {
        status: if toggled { "toggled" } else { "missing" },
        items: state.store.shopping_list(),
    })
}

/// DELETE /api/shopping-list/{id} - Remove an item; an absent id is a no-op.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MutateShoppingListResponse> {
    let removed = state.store.remove_shopping_item(&id);
    Json(MutateShoppingListResponse {
        status: if removed { "removed" } else { "missing" },
        items: state.store.shopping_list(),
    })
}
