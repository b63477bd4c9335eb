use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

/// One food line inside a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub food: FoodItem,
    pub quantity: f64,
    pub unit: String,
}

fn default_servings() -> u32 {
    1
}

/// A catalog recipe. Nutrition values are totals for the whole recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeWithNutrition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub items: Vec<RecipeItem>,
}

impl RecipeWithNutrition {
    /// Prep plus cook time; missing values count as zero. Saturates at `u32::MAX`.
    pub fn total_time(&self) -> u32 {
        self.prep_time
            .unwrap_or(0)
            .saturating_add(self.cook_time.unwrap_or(0))
    }
}

/// Per-serving view of a recipe for presentation layers.
///
/// Derived, never written back onto the catalog recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDisplay {
    pub id: String,
    pub name: String,
    pub servings: u32,
    pub total_time: u32,
    pub calories_per_serving: i32,
    pub protein_per_serving: i32,
    pub carbs_per_serving: i32,
    pub fat_per_serving: i32,
    pub ingredient_count: usize,
}

impl RecipeDisplay {
    pub fn from_recipe(recipe: &RecipeWithNutrition) -> Self {
        let servings = recipe.servings.max(1);
        let per_serving = |total: f64| (total / servings as f64).round() as i32;

        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            servings,
            total_time: recipe.total_time(),
            calories_per_serving: per_serving(recipe.calories),
            protein_per_serving: per_serving(recipe.protein),
            carbs_per_serving: per_serving(recipe.carbs),
            fat_per_serving: per_serving(recipe.fat),
            ingredient_count: recipe.items.len(),
        }
    }
}
