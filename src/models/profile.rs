use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
}

/// Dietary goal. Drives calorie scaling, macro split and meal distribution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
    LoseMaintainMuscle,
    GainMuscleLoseFat,
    Recomp,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::Maintain,
        Goal::Lose,
        Goal::Gain,
        Goal::LoseMaintainMuscle,
        Goal::GainMuscleLoseFat,
        Goal::Recomp,
    ];
}

/// Physiological profile the metabolic calculations run on.
///
/// Weight is in kilograms, height in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl NutritionProfile {
    /// Pre-check for callers. The planner itself never validates.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(PlannerError::InvalidInput("age must be > 0".to_string()));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(PlannerError::InvalidInput(
                "weight must be a positive number of kg".to_string(),
            ));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(PlannerError::InvalidInput(
                "height must be a positive number of cm".to_string(),
            ));
        }
        Ok(())
    }
}

/// Daily energy and macro targets, all whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: i32,
    /// Grams.
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl MacroTargets {
    /// Energy implied by the gram targets (4/4/9 kcal per gram).
    pub fn macro_calories(&self) -> i32 {
        self.protein * 4 + self.carbs * 4 + self.fat * 9
    }
}

/// Fractional per-meal targets used by the ingredient composer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> NutritionProfile {
        NutritionProfile {
            age: 30,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_validate_accepts_sane_profile() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut p = sample_profile();
        p.age = 0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.weight = f64::NAN;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.height = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_deserializes_snake_case_enums() {
        let json = r#"{"age": 41, "weight": 62.5, "height": 160, "gender": "female",
            "activityLevel": "very_active", "goal": "lose_maintain_muscle"}"#;
        let p: NutritionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.activity_level, ActivityLevel::VeryActive);
        assert_eq!(p.goal, Goal::LoseMaintainMuscle);
    }
}
