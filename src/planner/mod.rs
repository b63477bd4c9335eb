pub mod assembler;
pub mod calculations;
pub mod composer;
pub mod constants;
pub mod distribution;
pub mod filter;
pub mod ingredients;

pub use assembler::{
    compose_meal, find_corrective_snack, generate_daily_plan, generate_weekly_plan,
    generate_weekly_plan_from_source, week_dates,
};
pub use calculations::{
    calculate_bmr, calculate_macro_targets, calculate_target_calories, calculate_tdee,
    get_nutrition_info, MacroSplit, NutritionInfo,
};
pub use composer::select_recipes_for_meal;
pub use constants::*;
pub use distribution::{ingredient_meal_targets, MealDistribution};
pub use filter::{candidate_rule, filter_candidates, CandidateRule};
pub use ingredients::{
    generate_intelligent_menu, generate_meal_ingredients, DietaryPreferences, RandomSource,
    RngSource,
};
