use std::sync::Arc;

use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oppskrift::{
    create_router, AppState, CollectionStorage, Config, RecipeSource, RecipeStore,
    SpoonacularSource, StaticSource,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:3000)");
            eprintln!("Optional: DATA_PATH (default: oppskrift.redb)");
            eprintln!("Optional: SPOONACULAR_API_KEY (fixture data when unset)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Oppskrift server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Data path: {}", config.data_path.display());

    // Open durable storage
    let storage = match CollectionStorage::open(&config.data_path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            std::process::exit(1);
        }
    };

    // Load collections
    let store = RecipeStore::load(storage);
    tracing::info!(
        "Loaded {} favorites and {} shopping items",
        store.favorites().len(),
        store.shopping_list().len()
    );

    // Select the data source once, based on whether a credential exists
    let source: Arc<dyn RecipeSource> = match config.api_key.clone() {
        Some(key) => {
            tracing::info!("Service credential found, using live recipe service");
            Arc::new(SpoonacularSource::new(key))
        }
        None => {
            tracing::info!("No service credential configured, using fixture data");
            Arc::new(StaticSource)
        }
    };

    // Create app state
    let state = AppState::new(store, source);

    // Build router
    let app = create_router(state).nest_service("/static", ServeDir::new("static"));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
