use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, FoodCategory, Goal, MealType};

/// Energy per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recipe composer bands (fractions of the meal target)
// ─────────────────────────────────────────────────────────────────────────────

/// A single recipe inside [LOWER, UPPER] of the target is used alone.
pub const SINGLE_RECIPE_LOWER: f64 = 0.85;
pub const SINGLE_RECIPE_UPPER: f64 = 1.15;

/// Below this share of the target the composer keeps adding recipes.
pub const UNDERSHOOT_RATIO: f64 = 0.85;

/// Top-up additions may not push the meal past this share of the target.
pub const TOP_UP_CEILING: f64 = 1.1;

/// Top-up stops once the meal reaches this share of the target.
pub const TOP_UP_STOP: f64 = 0.9;

// ─────────────────────────────────────────────────────────────────────────────
// Daily shortfall correction
// ─────────────────────────────────────────────────────────────────────────────

/// A day below this share of its calorie target gets a corrective snack.
pub const DAILY_SHORTFALL_RATIO: f64 = 0.85;

/// Corrective snack band, as fractions of the missing calories.
pub const CORRECTIVE_SNACK_MIN: f64 = 0.5;
pub const CORRECTIVE_SNACK_MAX: f64 = 1.2;

/// Days in a weekly plan.
pub const DAYS_PER_WEEK: u32 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Ingredient composer
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_INGREDIENTS: usize = 3;
/// Number of extra ingredients the composer may add on top of the minimum.
pub const INGREDIENT_SPREAD: usize = 3;
pub const MAX_INGREDIENTS: usize = 6;

/// Per-ingredient gram range.
pub const MIN_INGREDIENT_GRAMS: f64 = 20.0;
pub const MAX_INGREDIENT_GRAMS: f64 = 250.0;

/// Daily macro split (protein/carbs/fat) for ingredient-built menus.
pub const INGREDIENT_PROTEIN_SHARE: f64 = 0.30;
pub const INGREDIENT_CARBS_SHARE: f64 = 0.40;
pub const INGREDIENT_FAT_SHARE: f64 = 0.30;

/// Categories the ingredient composer rotates through.
pub const ROTATION_CATEGORIES: [FoodCategory; 7] = [
    FoodCategory::Protein,
    FoodCategory::Carb,
    FoodCategory::Vegetable,
    FoodCategory::Fruit,
    FoodCategory::Dairy,
    FoodCategory::Fat,
    FoodCategory::Nut,
];

/// Slot order for ingredient-built menus.
pub const INGREDIENT_MEAL_ORDER: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Snack,
    MealType::Dinner,
];

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_FACTORS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::VeryActive, 1.9);
    m
});

pub static ACTIVITY_DESCRIPTIONS: LazyLock<HashMap<ActivityLevel, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert(ActivityLevel::Sedentary, "Sedentary (little or no exercise)");
        m.insert(ActivityLevel::Light, "Light activity (light exercise 1-3 days/week)");
        m.insert(
            ActivityLevel::Moderate,
            "Moderate activity (moderate exercise 3-5 days/week)",
        );
        m.insert(ActivityLevel::Active, "Active (hard exercise 6-7 days/week)");
        m.insert(
            ActivityLevel::VeryActive,
            "Very active (very hard exercise, physical job)",
        );
        m
    });

pub static GOAL_DESCRIPTIONS: LazyLock<HashMap<Goal, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Goal::Maintain, "Maintain current weight");
    m.insert(Goal::Lose, "Lose weight (calorie deficit)");
    m.insert(Goal::Gain, "Gain weight (calorie surplus)");
    m.insert(Goal::LoseMaintainMuscle, "Lose weight while keeping muscle");
    m.insert(Goal::GainMuscleLoseFat, "Gain muscle and lose fat");
    m.insert(
        Goal::Recomp,
        "Body recomposition (keep weight, change composition)",
    );
    m
});

/// Get the TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    *ACTIVITY_FACTORS.get(&level).unwrap_or(&1.2)
}

pub fn activity_description(level: ActivityLevel) -> &'static str {
    ACTIVITY_DESCRIPTIONS.get(&level).unwrap_or(&"Unknown")
}

pub fn goal_description(goal: Goal) -> &'static str {
    GOAL_DESCRIPTIONS.get(&goal).unwrap_or(&"Unknown")
}

/// Names an ingredient-built meal may be given.
pub fn meal_names(meal_type: MealType) -> &'static [&'static str] {
    match meal_type {
        MealType::Breakfast => &[
            "Energizing Breakfast",
            "Protein Breakfast",
            "Healthy Breakfast",
            "Complete Breakfast",
        ],
        MealType::Lunch => &[
            "Balanced Lunch",
            "Nourishing Lunch",
            "Complete Lunch",
            "Healthy Lunch",
        ],
        MealType::Snack => &[
            "Protein Snack",
            "Healthy Snack",
            "Energy Snack",
            "Nourishing Snack",
        ],
        MealType::Dinner => &[
            "Light Dinner",
            "Protein Dinner",
            "Healthy Dinner",
            "Complete Dinner",
        ],
    }
}
