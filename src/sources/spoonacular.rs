use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::RecipeSource;
use crate::error::SourceError;
use crate::models::{Recipe, SearchQuery, SimilarRecipe};

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Upper bound on results requested per search.
const RESULT_LIMIT: u32 = 12;

/// Similar recipes kept after dietary filtering.
const SIMILAR_LIMIT: usize = 4;

/// Ingredients excluded from every search request.
const EXCLUDED_INGREDIENTS: &str = "beef,ground beef,steak";

/// Ingredient names that disqualify a recipe from the vegetarian filter.
const NON_VEGETARIAN_TERMS: &[&str] = &[
    "beef", "steak", "chicken", "pork", "ham", "bacon", "turkey", "lamb", "veal", "duck", "goose",
    "meat", "fish", "salmon", "tuna", "shrimp", "prawn", "crab", "lobster", "oyster", "mussel",
    "clam", "scallop", "anchovy", "sardine",
];

/// Search response envelope.
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    results: Vec<Recipe>,
}

/// Live Spoonacular API client. Stateless beyond the reqwest connection
/// pool; every call carries the service credential.
pub struct SpoonacularSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularSource {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a non-default API base URL.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let response = self.client.get(url).query(params).send().await?;
        match response.status() {
            StatusCode::PAYMENT_REQUIRED => Err(SourceError::QuotaExceeded),
            status if !status.is_success() => Err(SourceError::Status(status.as_u16())),
            _ => Ok(response.json().await?),
        }
    }

    /// Common query parameters for the search endpoints. The diet filter
    /// defaults to vegetarian when the caller does not specify one.
    fn search_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("addRecipeInformation", "true".to_string()),
            ("number", RESULT_LIMIT.to_string()),
            ("excludeIngredients", EXCLUDED_INGREDIENTS.to_string()),
            (
                "diet",
                query
                    .diet
                    .clone()
                    .unwrap_or_else(|| "vegetarian".to_string()),
            ),
        ];
        if let Some(text) = &query.query {
            params.push(("query", text.clone()));
        }
        if let Some(cuisine) = &query.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        if let Some(meal_type) = &query.meal_type {
            params.push(("type", meal_type.clone()));
        }
        if let Some(max) = query.max_ready_time {
            params.push(("maxReadyTime", max.to_string()));
        }
        params
    }
}

#[async_trait]
impl RecipeSource for SpoonacularSource {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SourceError> {
        let url = format!("{}/complexSearch", self.base_url);
        let response: ComplexSearchResponse = self.get_json(&url, &self.search_params(query)).await?;
        Ok(response.results)
    }

    async fn recipe(&self, id: i64) -> Result<Recipe, SourceError> {
        let url = format!("{}/{}/information", self.base_url, id);
        let params = [
            ("apiKey", self.api_key.clone()),
            ("includeNutrition", "true".to_string()),
        ];
        let recipe: Recipe = match self.get_json(&url, &params).await {
            Err(SourceError::Status(404)) => return Err(SourceError::NotFound(id)),
            other => other?,
        };
        check_vegetarian(&recipe)?;
        Ok(recipe)
    }

    async fn similar(&self, id: i64) -> Result<Vec<SimilarRecipe>, SourceError> {
        let url = format!("{}/{}/similar", self.base_url, id);
        let params = [
            ("apiKey", self.api_key.clone()),
            ("number", RESULT_LIMIT.to_string()),
        ];
        let candidates: Vec<SimilarRecipe> = self.get_json(&url, &params).await?;
        if candidates.is_empty() {
            return Ok(candidates);
        }

        // The similar endpoint carries no dietary data, so cross-check the
        // candidates through the bulk-information endpoint.
        let ids = candidates
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/informationBulk", self.base_url);
        let params = [("apiKey", self.api_key.clone()), ("ids", ids)];
        let details: Vec<Recipe> = self.get_json(&url, &params).await?;

        Ok(details
            .into_iter()
            .filter(|r| r.vegetarian == Some(true))
            .map(|r| SimilarRecipe {
                id: r.id,
                title: r.title,
                ready_in_minutes: r.ready_in_minutes,
            })
            .take(SIMILAR_LIMIT)
            .collect())
    }

    async fn search_cuisine(
        &self,
        cuisine: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Recipe>, SourceError> {
        let mut params = self.search_params(query);
        params.retain(|(key, _)| *key != "cuisine");
        params.push(("cuisine", cuisine.to_string()));

        let url = format!("{}/complexSearch", self.base_url);
        let response: ComplexSearchResponse = self.get_json(&url, &params).await?;
        Ok(response.results)
    }
}

/// Reject recipes that are not marked vegetarian or whose ingredient names
/// match the non-vegetarian term list.
fn check_vegetarian(recipe: &Recipe) -> Result<(), SourceError> {
    if recipe.vegetarian != Some(true) {
        return Err(SourceError::Excluded(format!(
            "recipe {} is not vegetarian",
            recipe.id
        )));
    }
    if let Some(ingredient) = recipe
        .extended_ingredients
        .iter()
        .find(|i| contains_non_vegetarian_term(&i.name))
    {
        return Err(SourceError::Excluded(format!(
            "recipe {} contains {}",
            recipe.id, ingredient.name
        )));
    }
    Ok(())
}

fn contains_non_vegetarian_term(name: &str) -> bool {
    let name = name.to_lowercase();
    NON_VEGETARIAN_TERMS.iter().any(|term| name.contains(term))
}
