use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe as returned by the recipe service and stored in favorites.
/// Fields beyond `id` are opaque display data; decoding tolerates absent
/// optional fields so partial records round-trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoonacular_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_likes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dish_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analyzed_instructions: Vec<InstructionSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_ingredients: Vec<Ingredient>,
}

/// A named group of instruction steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// A single numbered instruction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

/// An ingredient entry on a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Lightweight summary returned by the similar-recipes query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRecipe {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
}

/// An entry on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub checked: bool,
    pub added_on: DateTime<Utc>,
}

/// Request to add an ingredient to the shopping list.
/// If `id` is absent it is composed from `recipe_id` and `ingredient_id`,
/// falling back to a random id when the ingredient id is unknown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddShoppingItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<i64>,
    #[serde(default)]
    pub ingredient_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Search filters accepted by the search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, rename = "mealType")]
    pub meal_type: Option<String>,
    #[serde(default, rename = "maxReadyTime")]
    pub max_ready_time: Option<u32>,
}

/// Response for the search endpoints.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
}

/// Response for the similar-recipes endpoint.
#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    pub results: Vec<SimilarRecipe>,
}

/// Response for reading the favorite set.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Recipe>,
}

/// Response for mutating the favorite set.
#[derive(Debug, Serialize)]
pub struct MutateFavoritesResponse {
    pub status: &'static str, // "created", "exists", "removed" or "missing"
    pub favorites: Vec<Recipe>,
}

/// Response for the favorite membership query.
#[derive(Debug, Serialize)]
pub struct FavoriteStatusResponse {
    pub id: i64,
    pub favorite: bool,
}

/// Response for reading the shopping list.
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingItem>,
}

/// Response for mutating the shopping list.
#[derive(Debug, Serialize)]
pub struct MutateShoppingListResponse {
    pub status: &'static str, // "created", "exists", "toggled", "removed" or "missing"
    pub items: Vec<ShoppingItem>,
}
