pub mod food;
pub mod plan;
pub mod profile;
pub mod recipe;

pub use food::{FoodCategory, FoodItem};
pub use plan::{
    DailyMealPlan, IntelligentMeal, MealPlan, MealType, SelectedIngredient, WeeklyMealPlan,
};
pub use profile::{ActivityLevel, Gender, Goal, MacroTargets, NutritionProfile, NutritionTargets};
pub use recipe::{RecipeDisplay, RecipeItem, RecipeWithNutrition};
