use async_trait::async_trait;

use super::RecipeSource;
use crate::error::SourceError;
use crate::models::{
    Ingredient, InstructionSet, InstructionStep, Recipe, SearchQuery, SimilarRecipe,
};

/// Fixture data source used when no service credential is configured, so
/// the application stays exercisable offline.
pub struct StaticSource;

#[async_trait]
impl RecipeSource for StaticSource {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<Recipe>, SourceError> {
        Ok(sample_recipes()
            .into_iter()
            .filter(|recipe| {
                recipe
                    .diets
                    .iter()
                    .any(|diet| diet.contains("vegetarian") || diet == "vegan")
            })
            .collect())
    }

    async fn recipe(&self, _id: i64) -> Result<Recipe, SourceError> {
        Ok(pasta_margherita())
    }

    async fn similar(&self, _id: i64) -> Result<Vec<SimilarRecipe>, SourceError> {
        Ok(related_recipes())
    }

    async fn search_cuisine(
        &self,
        cuisine: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Recipe>, SourceError> {
        if cuisine.eq_ignore_ascii_case("indian") {
            return Ok(indian_recipes());
        }
        self.search(query).await
    }
}

/// Sample search results.
fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 511728,
            title: "Pasta Margherita".to_string(),
            image: Some("https://spoonacular.com/recipeImages/511728-312x231.jpg".to_string()),
            image_type: Some("jpg".to_string()),
            ready_in_minutes: Some(15),
            spoonacular_score: Some(87.0),
            aggregate_likes: Some(203),
            dish_types: dish_types_main(),
            diets: vec!["lacto ovo vegetarian".to_string()],
            ..Default::default()
        },
        Recipe {
            id: 654857,
            title: "Pasta On The Border".to_string(),
            image: Some("https://spoonacular.com/recipeImages/654857-312x231.jpg".to_string()),
            image_type: Some("jpg".to_string()),
            ready_in_minutes: Some(30),
            spoonacular_score: Some(82.0),
            aggregate_likes: Some(12),
            dish_types: dish_types_main(),
            diets: vec!["lacto ovo vegetarian".to_string()],
            ..Default::default()
        },
        Recipe {
            id: 654905,
            title: "Pasta Vegetable Soup".to_string(),
            image: Some("https://spoonacular.com/recipeImages/654905-312x231.jpg".to_string()),
            image_type: Some("jpg".to_string()),
            ready_in_minutes: Some(25),
            spoonacular_score: Some(95.0),
            aggregate_likes: Some(87),
            dish_types: vec![
                "soup".to_string(),
                "lunch".to_string(),
                "main course".to_string(),
            ],
            diets: vec!["lacto ovo vegetarian".to_string()],
            ..Default::default()
        },
        Recipe {
            id: 639851,
            title: "Chana Masala".to_string(),
            image: Some("https://spoonacular.com/recipeImages/639851-312x231.jpg".to_string()),
            image_type: Some("jpg".to_string()),
            ready_in_minutes: Some(30),
            spoonacular_score: Some(94.0),
            aggregate_likes: Some(176),
            dish_types: dish_types_main(),
            diets: vec!["vegetarian".to_string(), "vegan".to_string()],
            ..Default::default()
        },
    ]
}

/// Detailed record served for any recipe-by-id request in fixture mode.
fn pasta_margherita() -> Recipe {
    Recipe {
        id: 511728,
        title: "Pasta Margherita".to_string(),
        image: Some("https://spoonacular.com/recipeImages/511728-556x370.jpg".to_string()),
        ready_in_minutes: Some(15),
        servings: Some(4),
        dish_types: dish_types_main(),
        diets: vec!["lacto ovo vegetarian".to_string()],
        vegetarian: Some(true),
        vegan: Some(false),
        summary: Some(
            "Pasta Margherita is a delicious vegetarian option. This recipe makes 4 servings \
             with <b>512 calories</b>, <b>19g of protein</b>, and <b>15g of fat</b> each. For \
             <b>$1.96 per serving</b>, this recipe <b>covers 28%</b> of your daily requirements \
             of vitamins and minerals. 203 people have made this recipe and would make it again. \
             From preparation to the plate, this recipe takes approximately <b>15 minutes</b>. \
             It is a good option if you're following a <b>vegetarian</b> diet."
                .to_string(),
        ),
        spoonacular_score: Some(87.0),
        health_score: Some(82.0),
        instructions: Some(
            "<ol><li>Cook pasta according to package directions.</li><li>While pasta is cooking, \
             heat olive oil in a large nonstick skillet over medium heat. Add garlic; cook 1 \
             minute, stirring frequently.</li><li>Add tomatoes; cook 2 minutes or until \
             thoroughly heated. Remove from heat.</li><li>Stir in salt and 1/4 cup basil.</li>\
             <li>Place pasta in a large bowl. Add tomato mixture, cheese, and remaining 1/4 cup \
             basil; toss well. Garnish with fresh basil sprigs, if desired.</li></ol>"
                .to_string(),
        ),
        analyzed_instructions: vec![InstructionSet {
            name: String::new(),
            steps: vec![
                InstructionStep {
                    number: 1,
                    step: "Cook pasta according to package directions.".to_string(),
                },
                InstructionStep {
                    number: 2,
                    step: "While pasta is cooking, heat olive oil in a large nonstick skillet \
                           over medium heat. Add garlic; cook 1 minute, stirring frequently."
                        .to_string(),
                },
                InstructionStep {
                    number: 3,
                    step: "Add tomatoes; cook 2 minutes or until thoroughly heated. Remove from \
                           heat."
                        .to_string(),
                },
                InstructionStep {
                    number: 4,
                    step: "Stir in salt and 1/4 cup basil.".to_string(),
                },
                InstructionStep {
                    number: 5,
                    step: "Place pasta in a large bowl. Add tomato mixture, cheese, and \
                           remaining 1/4 cup basil; toss well. Garnish with fresh basil sprigs, \
                           if desired."
                        .to_string(),
                },
            ],
        }],
        extended_ingredients: vec![
            ingredient(20420, "pasta", "8 ounces uncooked pasta", 8.0, "ounces", "fusilli.jpg"),
            ingredient(11215, "garlic", "3 garlic cloves, minced", 3.0, "cloves", "garlic.png"),
            ingredient(
                4053,
                "olive oil",
                "1 tablespoon olive oil",
                1.0,
                "tablespoon",
                "olive-oil.jpg",
            ),
            ingredient(11529, "tomato", "4 cups chopped tomato", 4.0, "cups", "tomato.png"),
            ingredient(
                2044,
                "fresh basil",
                "1/2 cup chopped fresh basil",
                0.5,
                "cup",
                "fresh-basil.jpg",
            ),
            ingredient(
                1026,
                "mozzarella",
                "1/2 cup fresh mozzarella, diced",
                0.5,
                "cup",
                "mozzarella.png",
            ),
        ],
        aggregate_likes: Some(203),
        ..Default::default()
    }
}

/// Related recipes served for any similar-recipes request in fixture mode.
fn related_recipes() -> Vec<SimilarRecipe> {
    vec![
        SimilarRecipe {
            id: 654857,
            title: "Pasta On The Border".to_string(),
            ready_in_minutes: Some(30),
        },
        SimilarRecipe {
            id: 654905,
            title: "Pasta Vegetable Soup".to_string(),
            ready_in_minutes: Some(25),
        },
    ]
}

/// Fixture set for the Indian cuisine page.
fn indian_recipes() -> Vec<Recipe> {
    vec![
        indian_recipe(
            639851,
            "Chana Masala",
            30,
            94.0,
            176,
            dish_types_main(),
            vec!["vegetarian".to_string(), "vegan".to_string()],
            "A popular vegetarian dish from Northern India made with chickpeas simmered in a \
             spicy tomato sauce with distinctive spices including garam masala and amchoor \
             (dried mango powder).",
        ),
        indian_recipe(
            654698,
            "Palak Paneer",
            45,
            92.0,
            184,
            dish_types_main(),
            vec!["vegetarian".to_string()],
            "A classic North Indian dish consisting of paneer cheese cubes in a smooth, creamy \
             spinach sauce spiced with garam masala, cumin, and other traditional spices.",
        ),
        indian_recipe(
            658577,
            "Vegetable Biryani",
            60,
            90.0,
            165,
            dish_types_main(),
            vec!["vegetarian".to_string()],
            "A fragrant rice dish cooked with aromatic spices, herbs, and mixed vegetables. \
             This festive dish is layered and steamed to perfection.",
        ),
        indian_recipe(
            662968,
            "Chole Bhature",
            75,
            88.0,
            146,
            vec![
                "breakfast".to_string(),
                "lunch".to_string(),
                "main course".to_string(),
            ],
            vec!["vegetarian".to_string()],
            "A Punjabi dish combining spicy chickpea curry (chole) with deep-fried bread \
             (bhature). This popular North Indian street food is often enjoyed as a hearty \
             breakfast or lunch.",
        ),
        indian_recipe(
            661322,
            "Dosa with Sambar and Chutney",
            90,
            89.0,
            132,
            vec!["breakfast".to_string(), "lunch".to_string()],
            vec!["vegetarian".to_string(), "gluten-free".to_string()],
            "A South Indian specialty consisting of a thin, crispy crepe made from fermented \
             rice and lentil batter, typically served with sambar (lentil soup) and coconut \
             chutney.",
        ),
        indian_recipe(
            663559,
            "Aloo Gobi",
            35,
            91.0,
            107,
            vec![
                "side dish".to_string(),
                "lunch".to_string(),
                "main course".to_string(),
            ],
            vec!["vegetarian".to_string(), "vegan".to_string()],
            "A dry vegetable dish made with potatoes (aloo), cauliflower (gobi) and Indian \
             spices. This simple yet flavorful dish is a staple in Indian homes.",
        ),
        indian_recipe(
            664257,
            "Malai Kofta",
            60,
            93.0,
            98,
            dish_types_main(),
            vec!["vegetarian".to_string()],
            "A luxurious North Indian dish featuring fried vegetable and paneer dumplings \
             (kofta) served in a rich, creamy tomato sauce. Often prepared for special \
             occasions and celebrations.",
        ),
    ]
}

fn dish_types_main() -> Vec<String> {
    vec![
        "lunch".to_string(),
        "main course".to_string(),
        "main dish".to_string(),
        "dinner".to_string(),
    ]
}

fn ingredient(
    id: i64,
    name: &str,
    original: &str,
    amount: f64,
    unit: &str,
    image: &str,
) -> Ingredient {
    Ingredient {
        id: Some(id),
        name: name.to_string(),
        original: Some(original.to_string()),
        amount: Some(amount),
        unit: Some(unit.to_string()),
        image: Some(image.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn indian_recipe(
    id: i64,
    title: &str,
    ready_in_minutes: u32,
    score: f64,
    likes: u32,
    dish_types: Vec<String>,
    diets: Vec<String>,
    summary: &str,
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        image: Some(format!(
            "https://spoonacular.com/recipeImages/{id}-312x231.jpg"
        )),
        image_type: Some("jpg".to_string()),
        ready_in_minutes: Some(ready_in_minutes),
        spoonacular_score: Some(score),
        aggregate_likes: Some(likes),
        dish_types,
        diets,
        summary: Some(summary.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_keeps_only_vegetarian_samples() {
        let results = StaticSource.search(&SearchQuery::default()).await.unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r
            .diets
            .iter()
            .any(|d| d.contains("vegetarian") || d == "vegan")));
    }

    #[tokio::test]
    async fn test_recipe_detail_has_ingredients() {
        let recipe = StaticSource.recipe(511728).await.unwrap();
        assert_eq!(recipe.title, "Pasta Margherita");
        assert_eq!(recipe.extended_ingredients.len(), 6);
        assert_eq!(recipe.vegetarian, Some(true));
    }

    #[tokio::test]
    async fn test_indian_cuisine_set() {
        let results = StaticSource
            .search_cuisine("indian", &SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 7);
        assert_eq!(results[0].title, "Chana Masala");
    }

    #[tokio::test]
    async fn test_unknown_cuisine_falls_back_to_samples() {
        let results = StaticSource
            .search_cuisine("italian", &SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(results.len(), 4);
    }
}
