//! Energy and macro target derivation from a nutrition profile.
//!
//! All results are rounded to whole numbers. Inputs are assumed to be
//! validated by the caller; garbage in yields garbage out.

use serde::Serialize;

use crate::models::{ActivityLevel, Gender, Goal, MacroTargets, NutritionProfile};
use crate::planner::constants::*;

/// Macro percentage split of daily calories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroSplit {
    pub fn for_goal(goal: Goal) -> Self {
        let (protein, fat, carbs) = match goal {
            Goal::Lose => (0.35, 0.30, 0.35),
            Goal::Gain => (0.25, 0.25, 0.50),
            Goal::LoseMaintainMuscle => (0.40, 0.30, 0.30),
            Goal::GainMuscleLoseFat => (0.35, 0.25, 0.40),
            Goal::Recomp => (0.40, 0.30, 0.30),
            Goal::Maintain => (0.30, 0.30, 0.40),
        };
        Self {
            protein,
            fat,
            carbs,
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Multiplier applied to TDEE for a goal.
pub fn goal_calorie_factor(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.80,
        Goal::Gain => 1.15,
        Goal::LoseMaintainMuscle => 0.85,
        Goal::GainMuscleLoseFat => 1.05,
        Goal::Recomp | Goal::Maintain => 1.00,
    }
}

fn mifflin_base(profile: &NutritionProfile) -> f64 {
    BMR_WEIGHT_COEF * profile.weight + BMR_HEIGHT_COEF * profile.height
        - BMR_AGE_COEF * profile.age as f64
}

/// Basal metabolic rate (Mifflin-St Jeor).
///
/// `Gender::Other` uses the mean of the male and female equations.
pub fn calculate_bmr(profile: &NutritionProfile) -> i32 {
    let base = mifflin_base(profile);
    let bmr = match profile.gender {
        Gender::Male => base + BMR_MALE_OFFSET,
        Gender::Female => base + BMR_FEMALE_OFFSET,
        Gender::Other => ((base + BMR_MALE_OFFSET) + (base + BMR_FEMALE_OFFSET)) / 2.0,
    };
    bmr.round() as i32
}

/// Total daily energy expenditure: rounded BMR times the activity factor.
pub fn calculate_tdee(profile: &NutritionProfile) -> i32 {
    let bmr = calculate_bmr(profile);
    (bmr as f64 * activity_factor(profile.activity_level)).round() as i32
}

pub fn calculate_target_calories(profile: &NutritionProfile) -> i32 {
    let tdee = calculate_tdee(profile);
    (tdee as f64 * goal_calorie_factor(profile.goal)).round() as i32
}

pub fn calculate_macro_targets(profile: &NutritionProfile) -> MacroTargets {
    let calories = calculate_target_calories(profile);
    let split = MacroSplit::for_goal(profile.goal);
    let kcal = calories as f64;

    MacroTargets {
        calories,
        protein: (kcal * split.protein / KCAL_PER_G_PROTEIN).round() as i32,
        carbs: (kcal * split.carbs / KCAL_PER_G_CARBS).round() as i32,
        fat: (kcal * split.fat / KCAL_PER_G_FAT).round() as i32,
    }
}

/// Display bundle of every number derived from a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    pub bmr: i32,
    pub tdee: i32,
    pub macro_targets: MacroTargets,
    pub activity_level_description: &'static str,
    pub goal_description: &'static str,
}

pub fn get_nutrition_info(profile: &NutritionProfile) -> NutritionInfo {
    NutritionInfo {
        bmr: calculate_bmr(profile),
        tdee: calculate_tdee(profile),
        macro_targets: calculate_macro_targets(profile),
        activity_level_description: activity_description(profile.activity_level),
        goal_description: goal_description(profile.goal),
    }
}

/// Every activity level maps to a factor of at least 1.2.
pub fn min_activity_factor() -> f64 {
    ActivityLevel::ALL
        .into_iter()
        .map(activity_factor)
        .fold(f64::MAX, f64::min)
}
