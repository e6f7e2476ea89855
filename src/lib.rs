pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod sources;
pub mod state;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{ApiError, SourceError, StorageError};
pub use routes::create_router;
pub use sources::{RecipeSource, SpoonacularSource, StaticSource};
pub use state::AppState;
pub use storage::CollectionStorage;
pub use store::RecipeStore;
