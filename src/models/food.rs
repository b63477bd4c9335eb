use serde::{Deserialize, Serialize};

/// Food category as stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carb,
    Vegetable,
    Fruit,
    Dairy,
    Fat,
    Grain,
    Legume,
    Nut,
    Seed,
    Sweetener,
    Beverage,
    Spice,
    #[serde(other)]
    Other,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carb => "carb",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fat => "fat",
            FoodCategory::Grain => "grain",
            FoodCategory::Legume => "legume",
            FoodCategory::Nut => "nut",
            FoodCategory::Seed => "seed",
            FoodCategory::Sweetener => "sweetener",
            FoodCategory::Beverage => "beverage",
            FoodCategory::Spice => "spice",
            FoodCategory::Other => "other",
        }
    }
}

fn default_portion_size() -> f64 {
    100.0
}

fn default_portion_unit() -> String {
    "g".to_string()
}

/// A catalog food with nutrition for its common portion.
///
/// Recipe payloads often carry a trimmed-down food, so portion and
/// dietary fields fall back to defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(default = "default_portion_size")]
    pub common_portion_size: f64,

    #[serde(default = "default_portion_unit")]
    pub common_portion_unit: String,

    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_lactose_free: bool,
    #[serde(default)]
    pub is_nut_free: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl FoodItem {
    /// Calorie density of the common portion.
    #[inline]
    pub fn calories_per_gram(&self) -> f64 {
        if self.common_portion_size > 0.0 {
            self.calories / self.common_portion_size
        } else {
            0.0
        }
    }

    /// Non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.common_portion_size >= 0.0
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            id: "f-oats".to_string(),
            name: "Oats".to_string(),
            category: FoodCategory::Grain,
            calories: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
            common_portion_size: 40.0,
            common_portion_unit: "g".to_string(),
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: false,
            is_lactose_free: true,
            is_nut_free: true,
            tags: vec![],
        }
    }

    #[test]
    fn test_calories_per_gram() {
        let food = sample_food();
        assert!((food.calories_per_gram() - 3.75).abs() < 0.001);

        let mut zero = sample_food();
        zero.common_portion_size = 0.0;
        assert_eq!(zero.calories_per_gram(), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.fat = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_trimmed_food_uses_defaults() {
        let json = r#"{"id": "1", "name": "Rice", "category": "carb",
            "calories": 130, "protein": 2.7, "carbs": 28, "fat": 0.3}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.common_portion_size, 100.0);
        assert_eq!(food.common_portion_unit, "g");
        assert!(!food.is_vegan);
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let json = r#"{"id": "1", "name": "Mystery", "category": "snackfood",
            "calories": 1, "protein": 0, "carbs": 0, "fat": 0}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.category, FoodCategory::Other);
    }
}
