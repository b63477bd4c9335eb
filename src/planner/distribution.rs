use crate::models::{Goal, MealType, NutritionTargets};
use crate::planner::constants::{
    INGREDIENT_CARBS_SHARE, INGREDIENT_FAT_SHARE, INGREDIENT_MEAL_ORDER,
    INGREDIENT_PROTEIN_SHARE, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Share of daily calories per meal slot.
///
/// Tuned independently of the macro split in `calculations`; the two
/// tables are not derived from each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealDistribution {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl MealDistribution {
    pub fn for_goal(goal: Goal) -> Self {
        let (breakfast, lunch, dinner, snack) = match goal {
            // Heavier breakfast, lighter dinner.
            Goal::Lose => (0.30, 0.35, 0.25, 0.10),
            Goal::LoseMaintainMuscle => (0.25, 0.35, 0.25, 0.15),
            Goal::Gain => (0.25, 0.30, 0.30, 0.15),
            Goal::GainMuscleLoseFat => (0.25, 0.35, 0.25, 0.15),
            Goal::Recomp => (0.25, 0.35, 0.30, 0.10),
            Goal::Maintain => (0.25, 0.35, 0.30, 0.10),
        };
        Self {
            breakfast,
            lunch,
            dinner,
            snack,
        }
    }

    pub fn share(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    /// Calorie target for one slot, rounded to a whole number.
    pub fn slot_target(&self, daily_calories: i32, meal_type: MealType) -> i32 {
        (daily_calories as f64 * self.share(meal_type)).round() as i32
    }

    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Per-slot share of each daily macro for ingredient-built menus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealMacroShare {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealMacroShare {
    pub fn for_meal(meal_type: MealType) -> Self {
        let (calories, protein, carbs, fat) = match meal_type {
            MealType::Breakfast => (0.25, 0.20, 0.30, 0.25),
            MealType::Lunch => (0.35, 0.40, 0.35, 0.30),
            MealType::Snack => (0.15, 0.15, 0.20, 0.20),
            MealType::Dinner => (0.25, 0.25, 0.15, 0.25),
        };
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Split a daily calorie budget into per-slot targets for the ingredient composer.
///
/// Daily grams come from a fixed 30/40/30 protein/carbs/fat split; values are
/// left unrounded. Slots come back in breakfast, lunch, snack, dinner order.
pub fn ingredient_meal_targets(daily_calories: f64) -> Vec<(MealType, NutritionTargets)> {
    let daily_protein = daily_calories * INGREDIENT_PROTEIN_SHARE / KCAL_PER_G_PROTEIN;
    let daily_carbs = daily_calories * INGREDIENT_CARBS_SHARE / KCAL_PER_G_CARBS;
    let daily_fat = daily_calories * INGREDIENT_FAT_SHARE / KCAL_PER_G_FAT;

    INGREDIENT_MEAL_ORDER
        .into_iter()
        .map(|meal_type| {
            let share = MealMacroShare::for_meal(meal_type);
            let targets = NutritionTargets {
                calories: daily_calories * share.calories,
                protein: daily_protein * share.protein,
                carbs: daily_carbs * share.carbs,
                fat: daily_fat * share.fat,
            };
            (meal_type, targets)
        })
        .collect()
}
