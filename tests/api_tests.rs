use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use oppskrift::{create_router, AppState, CollectionStorage, RecipeStore, StaticSource};

/// Create a test app backed by a fresh database and the fixture source.
/// The TempDir must stay alive for the duration of the test.
fn create_test_app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let storage = CollectionStorage::open(dir.path().join("test.redb")).unwrap();
    let store = RecipeStore::load(storage);
    let state = AppState::new(store, Arc::new(StaticSource));
    (create_router(state), dir)
}

/// Helper to get response body as string.
async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_string(body).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ============================================================================
// Health endpoint tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "OK");
}

// ============================================================================
// Favorites endpoint tests
// ============================================================================

#[tokio::test]
async fn test_get_favorites_empty() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/api/favorites")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert!(json["favorites"].is_array());
    assert_eq!(json["favorites"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_add_favorite() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/favorites",
            r#"{
                "id": 511728,
                "title": "Pasta Margherita",
                "readyInMinutes": 15,
                "spoonacularScore": 87
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "created");
    assert_eq!(json["favorites"][0]["id"], 511728);
    assert_eq!(json["favorites"][0]["title"], "Pasta Margherita");
    assert_eq!(json["favorites"][0]["readyInMinutes"], 15);
}

#[tokio::test]
async fn test_add_favorite_idempotent() {
    let (app, _dir) = create_test_app();

    let response1 = app
        .clone()
        .oneshot(post_json(
            "/api/favorites",
            r#"{"id": 511728, "title": "Pasta Margherita"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response1.status(), StatusCode::CREATED);

    // Second request with the same id - the set is unchanged
    let response2 = app
        .oneshot(post_json(
            "/api/favorites",
            r#"{"id": 511728, "title": "Different Title"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response2.status(), StatusCode::OK);

    let json = body_json(response2.into_body()).await;
    assert_eq!(json["status"], "exists");
    assert_eq!(json["favorites"].as_array().unwrap().len(), 1);
    assert_eq!(json["favorites"][0]["title"], "Pasta Margherita");
}

#[tokio::test]
async fn test_add_favorite_requires_positive_id() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(post_json("/api/favorites", r#"{"id": 0, "title": "Bad"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("recipe id"));
}

#[tokio::test]
async fn test_remove_favorite() {
    let (app, _dir) = create_test_app();

    let _ = app
        .clone()
        .oneshot(post_json(
            "/api/favorites",
            r#"{"id": 511728, "title": "Pasta Margherita"}"#,
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(delete("/api/favorites/511728"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "removed");
    assert_eq!(json["favorites"].as_array().unwrap().len(), 0);

    // Removing again is a no-op, not an error
    let response = app.oneshot(delete("/api/favorites/511728")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "missing");
}

#[tokio::test]
async fn test_favorite_membership() {
    let (app, _dir) = create_test_app();

    let _ = app
        .clone()
        .oneshot(post_json(
            "/api/favorites",
            r#"{"id": 511728, "title": "Pasta Margherita"}"#,
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/favorites/511728"))
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["favorite"], true);

    let response = app.oneshot(get("/api/favorites/999")).await.unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["favorite"], false);
}

#[tokio::test]
async fn test_favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.redb");

    {
        let storage = CollectionStorage::open(&path).unwrap();
        let state = AppState::new(RecipeStore::load(storage), Arc::new(StaticSource));
        let app = create_router(state);

        let _ = app
            .oneshot(post_json(
                "/api/favorites",
                r#"{"id": 1, "title": "Pasta Margherita"}"#,
            ))
            .await
            .unwrap();
    }

    let storage = CollectionStorage::open(&path).unwrap();
    let state = AppState::new(RecipeStore::load(storage), Arc::new(StaticSource));
    let app = create_router(state);

    let response = app.oneshot(get("/api/favorites")).await.unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["favorites"].as_array().unwrap().len(), 1);
    assert_eq!(json["favorites"][0]["id"], 1);
    assert_eq!(json["favorites"][0]["title"], "Pasta Margherita");
}

// ============================================================================
// Shopping list endpoint tests
// ============================================================================

#[tokio::test]
async fn test_shopping_list_flow() {
    let (app, _dir) = create_test_app();

    // Add an item
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/shopping-list",
            r#"{"id": "1-20420", "name": "pasta", "original": "8 ounces uncooked pasta"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "created");
    assert_eq!(json["items"][0]["id"], "1-20420");
    assert_eq!(json["items"][0]["checked"], false);

    // Duplicate id - list unchanged
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/shopping-list",
            r#"{"id": "1-20420", "name": "different"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "exists");
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["name"], "pasta");

    // Toggle checked; name and original stay put
    let response = app
        .clone()
        .oneshot(post_json("/api/shopping-list/1-20420/toggle", "{}"))
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "toggled");
    assert_eq!(json["items"][0]["checked"], true);
    assert_eq!(json["items"][0]["name"], "pasta");
    assert_eq!(json["items"][0]["original"], "8 ounces uncooked pasta");

    // Remove
    let response = app
        .clone()
        .oneshot(delete("/api/shopping-list/1-20420"))
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "removed");
    assert_eq!(json["items"].as_array().unwrap().len(), 0);

    // Toggling an absent item reports missing
    let response = app
        .oneshot(post_json("/api/shopping-list/1-20420/toggle", "{}"))
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "missing");
}

#[tokio::test]
async fn test_add_shopping_item_composes_id() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/shopping-list",
            r#"{"recipeId": 511728, "ingredientId": 20420, "name": "pasta"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["items"][0]["id"], "511728-20420");
}

#[tokio::test]
async fn test_add_shopping_item_requires_name() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(post_json("/api/shopping-list", r#"{"id": "x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("name or original"));
}

// ============================================================================
// Recipe data source tests (fixture mode)
// ============================================================================

#[tokio::test]
async fn test_search_returns_fixture_results() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/api/search?query=pasta")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["id"], 511728);
    assert_eq!(results[0]["title"], "Pasta Margherita");
}

#[tokio::test]
async fn test_get_recipe_detail() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/api/recipes/511728")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["title"], "Pasta Margherita");
    assert_eq!(json["servings"], 4);
    assert_eq!(json["extendedIngredients"].as_array().unwrap().len(), 6);
    assert_eq!(json["extendedIngredients"][0]["name"], "pasta");
}

#[tokio::test]
async fn test_get_similar_recipes() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get("/api/recipes/511728/similar"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "Pasta On The Border");
}

#[tokio::test]
async fn test_cuisine_search() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get("/api/cuisines/indian/recipes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 7);
    assert_eq!(results[0]["title"], "Chana Masala");
}

// ============================================================================
// Integration: favorite a searched recipe
// ============================================================================

#[tokio::test]
async fn test_search_then_favorite() {
    let (app, _dir) = create_test_app();

    let response = app.clone().oneshot(get("/api/search")).await.unwrap();
    let json = body_json(response.into_body()).await;
    let first = json["results"][0].clone();

    let response = app
        .clone()
        .oneshot(post_json("/api/favorites", &first.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get(&format!("/api/favorites/{}", first["id"])))
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["favorite"], true);
}
