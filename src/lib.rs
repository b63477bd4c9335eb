pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod shopping;

pub use error::{PlannerError, Result};
pub use models::{DailyMealPlan, MealPlan, NutritionProfile, RecipeWithNutrition, WeeklyMealPlan};
