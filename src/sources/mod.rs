pub mod fixtures;
pub mod spoonacular;

pub use fixtures::StaticSource;
pub use spoonacular::SpoonacularSource;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{Recipe, SearchQuery, SimilarRecipe};

/// A recipe data source.
///
/// Selected once at startup: the live Spoonacular client when a service
/// credential is configured, static fixture data otherwise. Callers never
/// branch on the mode.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Free-text search with optional diet, cuisine, meal-type and
    /// max-ready-time filters.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SourceError>;

    /// Full recipe record by id, including ingredients and instructions.
    async fn recipe(&self, id: i64) -> Result<Recipe, SourceError>;

    /// Lightweight summaries of recipes similar to `id`.
    async fn similar(&self, id: i64) -> Result<Vec<SimilarRecipe>, SourceError>;

    /// Cuisine-restricted variant of `search`.
    async fn search_cuisine(
        &self,
        cuisine: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Recipe>, SourceError>;
}
