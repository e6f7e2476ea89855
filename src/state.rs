use std::sync::Arc;

use crate::sources::RecipeSource;
use crate::store::RecipeStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub source: Arc<dyn RecipeSource>,
}

impl AppState {
    pub fn new(store: RecipeStore, source: Arc<dyn RecipeSource>) -> Self {
        Self { store, source }
    }
}
