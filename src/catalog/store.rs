use std::collections::HashMap;

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::{FoodItem, RecipeWithNutrition};

/// In-memory catalog of foods and recipes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    recipes: Vec<RecipeWithNutrition>,
    /// Lowercase food name to index in `foods`.
    food_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>, recipes: Vec<RecipeWithNutrition>) -> Self {
        let food_index = foods
            .iter()
            .enumerate()
            .map(|(i, f)| (f.key(), i))
            .collect();
        Self {
            foods,
            recipes,
            food_index,
        }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&FoodItem> {
        self.food_index
            .get(&name.to_lowercase())
            .map(|&i| &self.foods[i])
    }

    pub fn get_recipe(&self, id: &str) -> Option<&RecipeWithNutrition> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn recipes(&self) -> &[RecipeWithNutrition] {
        &self.recipes
    }

    /// Food names, for fuzzy matching user input.
    pub fn food_names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    /// Foods or recipes with negative nutrition values.
    pub fn invalid_entries(&self) -> Vec<&str> {
        let bad_foods = self
            .foods
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| f.name.as_str());
        let bad_recipes = self
            .recipes
            .iter()
            .filter(|r| r.calories < 0.0 || r.protein < 0.0 || r.carbs < 0.0 || r.fat < 0.0)
            .map(|r| r.name.as_str());
        bad_foods.chain(bad_recipes).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.recipes.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn fetch_recipes(&self) -> Result<Vec<RecipeWithNutrition>> {
        Ok(self.recipes.clone())
    }

    fn fetch_foods(&self) -> Result<Vec<FoodItem>> {
        Ok(self.foods.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    fn food(name: &str, calories: f64) -> FoodItem {
        FoodItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: FoodCategory::Fruit,
            calories,
            protein: 0.5,
            carbs: 20.0,
            fat: 0.2,
            common_portion_size: 100.0,
            common_portion_unit: "g".to_string(),
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: true,
            is_lactose_free: true,
            is_nut_free: true,
            tags: vec![],
        }
    }

    #[test]
    fn test_get_food_case_insensitive() {
        let catalog = Catalog::new(vec![food("Apple", 52.0)], vec![]);
        assert!(catalog.get_food("apple").is_some());
        assert!(catalog.get_food("APPLE").is_some());
        assert!(catalog.get_food("banana").is_none());
    }

    #[test]
    fn test_invalid_entries() {
        let catalog = Catalog::new(vec![food("Apple", 52.0), food("Broken", -1.0)], vec![]);
        assert_eq!(catalog.invalid_entries(), vec!["Broken"]);
    }

    #[test]
    fn test_source_returns_copies() {
        let catalog = Catalog::new(vec![food("Apple", 52.0)], vec![]);
        let mut fetched = catalog.fetch_foods().unwrap();
        fetched[0].calories = 0.0;
        assert_eq!(catalog.foods()[0].calories, 52.0);
    }
}
