use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, MacroTargets, NutritionTargets, RecipeWithNutrition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Slot order used when assembling a recipe-based day.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// Recipes chosen for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub meal_type: MealType,
    pub target_calories: i32,
    pub recipes: Vec<RecipeWithNutrition>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl MealPlan {
    /// Build a slot, summing nutrition over the selected recipes.
    pub fn new(
        meal_type: MealType,
        target_calories: i32,
        recipes: Vec<RecipeWithNutrition>,
    ) -> Self {
        let total_calories = recipes.iter().map(|r| r.calories).sum();
        let total_protein = recipes.iter().map(|r| r.protein).sum();
        let total_carbs = recipes.iter().map(|r| r.carbs).sum();
        let total_fat = recipes.iter().map(|r| r.fat).sum();

        Self {
            meal_type,
            target_calories,
            recipes,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
        }
    }
}

/// One day of meals with totals and the targets it was planned against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMealPlan {
    pub date: NaiveDate,
    pub meals: Vec<MealPlan>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub target_calories: i32,
    pub target_protein: i32,
    pub target_carbs: i32,
    pub target_fat: i32,
}

impl DailyMealPlan {
    pub fn new(date: NaiveDate, meals: Vec<MealPlan>, targets: &MacroTargets) -> Self {
        let total_calories = meals.iter().map(|m| m.total_calories).sum();
        let total_protein = meals.iter().map(|m| m.total_protein).sum();
        let total_carbs = meals.iter().map(|m| m.total_carbs).sum();
        let total_fat = meals.iter().map(|m| m.total_fat).sum();

        Self {
            date,
            meals,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
            target_calories: targets.calories,
            target_protein: targets.protein,
            target_carbs: targets.carbs,
            target_fat: targets.fat,
        }
    }

    /// Signed difference between planned and target calories.
    pub fn calorie_gap(&self) -> f64 {
        self.total_calories - self.target_calories as f64
    }
}

/// Seven consecutive days.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub start_date: NaiveDate,
    pub days: Vec<DailyMealPlan>,
}

impl WeeklyMealPlan {
    pub fn total_calories(&self) -> f64 {
        self.days.iter().map(|d| d.total_calories).sum()
    }
}

/// A raw food with a computed quantity, produced by the ingredient composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedIngredient {
    pub food: FoodItem,
    /// Grams, clamped to the composer's portion range.
    pub quantity: f64,
    pub unit: String,
}

impl SelectedIngredient {
    pub fn estimated_calories(&self) -> f64 {
        self.food.calories_per_gram() * self.quantity
    }
}

/// A meal built ingredient by ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligentMeal {
    pub meal_type: MealType,
    pub name: String,
    pub targets: NutritionTargets,
    pub ingredients: Vec<SelectedIngredient>,
}

impl IntelligentMeal {
    pub fn estimated_calories(&self) -> f64 {
        self.ingredients.iter().map(|i| i.estimated_calories()).sum()
    }
}
