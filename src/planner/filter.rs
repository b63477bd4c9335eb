//! Meal-type and goal specific narrowing of the recipe catalog.

use tracing::{debug, warn};

use crate::models::{Goal, MealType, RecipeWithNutrition};

/// Declarative predicate over a recipe, relative to a meal's calorie target.
///
/// Calorie bounds are ratios of the target; every bound is inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CandidateRule {
    pub min_calories_ratio: Option<f64>,
    pub max_calories_ratio: Option<f64>,
    pub min_protein: Option<f64>,
    pub max_carbs: Option<f64>,
    pub max_fat: Option<f64>,
    /// Minutes of prep plus cook time.
    pub max_total_time: Option<u32>,
}

impl CandidateRule {
    const fn band(min: Option<f64>, max: f64) -> Self {
        Self {
            min_calories_ratio: min,
            max_calories_ratio: Some(max),
            min_protein: None,
            max_carbs: None,
            max_fat: None,
            max_total_time: None,
        }
    }

    /// Calories at most `max` times the target.
    const fn at_most(max: f64) -> Self {
        Self::band(None, max)
    }

    /// Calories within `[min, max]` times the target.
    const fn between(min: f64, max: f64) -> Self {
        Self::band(Some(min), max)
    }

    const fn protein_at_least(mut self, grams: f64) -> Self {
        self.min_protein = Some(grams);
        self
    }

    const fn carbs_at_most(mut self, grams: f64) -> Self {
        self.max_carbs = Some(grams);
        self
    }

    const fn fat_at_most(mut self, grams: f64) -> Self {
        self.max_fat = Some(grams);
        self
    }

    const fn ready_within(mut self, minutes: u32) -> Self {
        self.max_total_time = Some(minutes);
        self
    }

    pub fn matches(&self, recipe: &RecipeWithNutrition, target_calories: f64) -> bool {
        if let Some(ratio) = self.min_calories_ratio {
            if recipe.calories < target_calories * ratio {
                return false;
            }
        }
        if let Some(ratio) = self.max_calories_ratio {
            if recipe.calories > target_calories * ratio {
                return false;
            }
        }
        if let Some(min) = self.min_protein {
            if recipe.protein < min {
                return false;
            }
        }
        if let Some(max) = self.max_carbs {
            if recipe.carbs > max {
                return false;
            }
        }
        if let Some(max) = self.max_fat {
            if recipe.fat > max {
                return false;
            }
        }
        if let Some(max) = self.max_total_time {
            if recipe.total_time() > max {
                return false;
            }
        }
        true
    }
}

/// Look up the suitability rule for a slot and goal.
pub fn candidate_rule(meal_type: MealType, goal: Goal) -> CandidateRule {
    use Goal::*;

    match (meal_type, goal) {
        (MealType::Breakfast, Lose) => CandidateRule::at_most(1.2)
            .protein_at_least(15.0)
            .ready_within(25),
        (MealType::Breakfast, LoseMaintainMuscle) => CandidateRule::at_most(1.1)
            .protein_at_least(20.0)
            .ready_within(30),
        (MealType::Breakfast, Gain) => CandidateRule::between(0.7, 1.3),
        (MealType::Breakfast, GainMuscleLoseFat | Recomp) => {
            CandidateRule::between(0.8, 1.2).protein_at_least(20.0)
        }
        (MealType::Breakfast, Maintain) => CandidateRule::between(0.7, 1.2).ready_within(30),

        (MealType::Lunch, LoseMaintainMuscle | GainMuscleLoseFat | Recomp) => {
            CandidateRule::between(0.7, 1.3).protein_at_least(25.0)
        }
        (MealType::Lunch, Lose | Gain | Maintain) => {
            CandidateRule::between(0.7, 1.3).protein_at_least(20.0)
        }

        (MealType::Dinner, Lose) => CandidateRule::at_most(1.0).carbs_at_most(40.0),
        (MealType::Dinner, LoseMaintainMuscle) => CandidateRule::at_most(1.1)
            .protein_at_least(25.0)
            .carbs_at_most(30.0),
        (MealType::Dinner, GainMuscleLoseFat | Recomp) => CandidateRule::between(0.7, 1.2)
            .protein_at_least(25.0)
            .carbs_at_most(50.0),
        (MealType::Dinner, Gain | Maintain) => CandidateRule::between(0.7, 1.2),

        (MealType::Snack, Lose) => CandidateRule::at_most(1.0)
            .protein_at_least(5.0)
            .fat_at_most(10.0),
        (MealType::Snack, LoseMaintainMuscle) => CandidateRule::at_most(1.1)
            .protein_at_least(10.0)
            .fat_at_most(12.0),
        (MealType::Snack, Gain) => CandidateRule::between(0.7, 1.5),
        (MealType::Snack, GainMuscleLoseFat | Recomp) => {
            CandidateRule::at_most(1.2).protein_at_least(8.0)
        }
        (MealType::Snack, Maintain) => CandidateRule::at_most(1.2),
    }
}

/// Narrow the catalog to recipes suitable for one slot.
///
/// Never returns fewer candidates than needed to plan the meal: when the
/// rule rejects everything, the whole catalog comes back.
pub fn filter_candidates<'a>(
    catalog: &'a [RecipeWithNutrition],
    meal_type: MealType,
    goal: Goal,
    target_calories: i32,
) -> Vec<&'a RecipeWithNutrition> {
    let rule = candidate_rule(meal_type, goal);
    let target = target_calories as f64;

    let suitable: Vec<&RecipeWithNutrition> = catalog
        .iter()
        .filter(|r| rule.matches(r, target))
        .collect();

    if suitable.is_empty() {
        warn!(
            meal = meal_type.label(),
            ?goal,
            target_calories,
            "no recipe passed the filter; falling back to the full catalog"
        );
        return catalog.iter().collect();
    }

    debug!(
        meal = meal_type.label(),
        ?goal,
        suitable = suitable.len(),
        catalog = catalog.len(),
        "filtered candidates"
    );
    suitable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(
        name: &str,
        cal: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        time: u32,
    ) -> RecipeWithNutrition {
        RecipeWithNutrition {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: None,
            instructions: None,
            prep_time: Some(time),
            cook_time: None,
            servings: 1,
            calories: cal,
            protein,
            carbs,
            fat,
            items: vec![],
        }
    }

    #[test]
    fn test_breakfast_lose_rule() {
        let rule = candidate_rule(MealType::Breakfast, Goal::Lose);
        // target 500 -> ceiling 600, protein >= 15, time <= 25
        assert!(rule.matches(&recipe("Eggs", 600.0, 15.0, 10.0, 10.0, 25), 500.0));
        assert!(!rule.matches(&recipe("Big", 601.0, 30.0, 10.0, 10.0, 10), 500.0));
        assert!(!rule.matches(&recipe("Toast", 300.0, 14.9, 40.0, 5.0, 5), 500.0));
        assert!(!rule.matches(&recipe("Slow", 300.0, 20.0, 40.0, 5.0, 26), 500.0));
    }

    #[test]
    fn test_dinner_lose_rule() {
        let rule = candidate_rule(MealType::Dinner, Goal::Lose);
        assert!(rule.matches(&recipe("Fish", 500.0, 40.0, 40.0, 10.0, 60), 500.0));
        assert!(!rule.matches(&recipe("Pasta", 450.0, 20.0, 41.0, 10.0, 20), 500.0));
        assert!(!rule.matches(&recipe("Feast", 501.0, 40.0, 10.0, 10.0, 20), 500.0));
    }

    #[test]
    fn test_snack_gain_rule_band() {
        let rule = candidate_rule(MealType::Snack, Goal::Gain);
        assert!(rule.matches(&recipe("Bar", 140.0, 1.0, 1.0, 30.0, 0), 200.0));
        assert!(rule.matches(&recipe("Shake", 300.0, 1.0, 1.0, 30.0, 0), 200.0));
        assert!(!rule.matches(&recipe("Nuts", 139.0, 1.0, 1.0, 30.0, 0), 200.0));
        assert!(!rule.matches(&recipe("Cake", 301.0, 1.0, 1.0, 30.0, 0), 200.0));
    }

    #[derive(Debug, Clone, Copy)]
    enum Field {
        Calories,
        Protein,
        Carbs,
        Fat,
        Minutes,
    }

    /// Passes every rule at a 1000 kcal target; one field is then moved.
    fn with(field: Field, value: f64) -> RecipeWithNutrition {
        let mut r = recipe("Baseline", 1000.0, 30.0, 20.0, 5.0, 10);
        match field {
            Field::Calories => r.calories = value,
            Field::Protein => r.protein = value,
            Field::Carbs => r.carbs = value,
            Field::Fat => r.fat = value,
            Field::Minutes => r.prep_time = Some(value as u32),
        }
        r
    }

    #[test]
    fn test_every_rule_edge_is_inclusive() {
        use Field::*;
        use Goal::*;
        use MealType::{Breakfast, Dinner, Lunch, Snack};

        // (meal, goal, field, last accepted value, first rejected value)
        let cases = [
            (Breakfast, Lose, Calories, 1200.0, 1200.5),
            (Breakfast, Lose, Protein, 15.0, 14.9),
            (Breakfast, Lose, Minutes, 25.0, 26.0),
            (Breakfast, Maintain, Calories, 700.0, 699.5),
            (Breakfast, Maintain, Calories, 1200.0, 1200.5),
            (Breakfast, Maintain, Minutes, 30.0, 31.0),
            (Breakfast, LoseMaintainMuscle, Calories, 1100.0, 1100.5),
            (Breakfast, LoseMaintainMuscle, Protein, 20.0, 19.9),
            (Breakfast, LoseMaintainMuscle, Minutes, 30.0, 31.0),
            (Breakfast, Gain, Calories, 700.0, 699.5),
            (Breakfast, Gain, Calories, 1300.0, 1300.5),
            (Breakfast, GainMuscleLoseFat, Calories, 800.0, 799.5),
            (Breakfast, GainMuscleLoseFat, Calories, 1200.0, 1200.5),
            (Breakfast, GainMuscleLoseFat, Protein, 20.0, 19.9),
            (Breakfast, Recomp, Protein, 20.0, 19.9),
            (Lunch, Maintain, Calories, 700.0, 699.5),
            (Lunch, Maintain, Calories, 1300.0, 1300.5),
            (Lunch, Maintain, Protein, 20.0, 19.9),
            (Lunch, Lose, Protein, 20.0, 19.9),
            (Lunch, Gain, Protein, 20.0, 19.9),
            (Lunch, LoseMaintainMuscle, Protein, 25.0, 24.9),
            (Lunch, GainMuscleLoseFat, Protein, 25.0, 24.9),
            (Lunch, Recomp, Calories, 1300.0, 1300.5),
            (Dinner, Lose, Calories, 1000.0, 1000.5),
            (Dinner, Lose, Carbs, 40.0, 40.1),
            (Dinner, LoseMaintainMuscle, Calories, 1100.0, 1100.5),
            (Dinner, LoseMaintainMuscle, Protein, 25.0, 24.9),
            (Dinner, LoseMaintainMuscle, Carbs, 30.0, 30.1),
            (Dinner, GainMuscleLoseFat, Calories, 700.0, 699.5),
            (Dinner, GainMuscleLoseFat, Calories, 1200.0, 1200.5),
            (Dinner, GainMuscleLoseFat, Protein, 25.0, 24.9),
            (Dinner, GainMuscleLoseFat, Carbs, 50.0, 50.1),
            (Dinner, Maintain, Calories, 700.0, 699.5),
            (Dinner, Maintain, Calories, 1200.0, 1200.5),
            (Dinner, Gain, Calories, 1200.0, 1200.5),
            (Snack, Lose, Calories, 1000.0, 1000.5),
            (Snack, Lose, Protein, 5.0, 4.9),
            (Snack, Lose, Fat, 10.0, 10.1),
            (Snack, LoseMaintainMuscle, Calories, 1100.0, 1100.5),
            (Snack, LoseMaintainMuscle, Protein, 10.0, 9.9),
            (Snack, LoseMaintainMuscle, Fat, 12.0, 12.1),
            (Snack, Gain, Calories, 700.0, 699.5),
            (Snack, Gain, Calories, 1500.0, 1500.5),
            (Snack, GainMuscleLoseFat, Calories, 1200.0, 1200.5),
            (Snack, GainMuscleLoseFat, Protein, 8.0, 7.9),
            (Snack, Recomp, Protein, 8.0, 7.9),
            (Snack, Maintain, Calories, 1200.0, 1200.5),
        ];

        for (meal, goal, field, accepted, rejected) in cases {
            let rule = candidate_rule(meal, goal);
            assert!(
                rule.matches(&with(field, accepted), 1000.0),
                "{:?}/{:?}: {:?} = {} should pass",
                meal,
                goal,
                field,
                accepted
            );
            assert!(
                !rule.matches(&with(field, rejected), 1000.0),
                "{:?}/{:?}: {:?} = {} should fail",
                meal,
                goal,
                field,
                rejected
            );
        }
    }

    #[test]
    fn test_rules_without_macro_limits_ignore_macros() {
        for (meal, goal) in [
            (MealType::Breakfast, Goal::Gain),
            (MealType::Dinner, Goal::Maintain),
            (MealType::Snack, Goal::Maintain),
        ] {
            let lean = recipe("Plain Rice", 1000.0, 0.0, 500.0, 100.0, 240);
            assert!(candidate_rule(meal, goal).matches(&lean, 1000.0), "{:?}/{:?}", meal, goal);
        }
    }

    #[test]
    fn test_recomp_shares_rules_with_gain_muscle_lose_fat() {
        for meal in MealType::ALL {
            assert_eq!(
                candidate_rule(meal, Goal::Recomp),
                candidate_rule(meal, Goal::GainMuscleLoseFat)
            );
        }
    }

    #[test]
    fn test_lunch_protein_floors() {
        let muscle = candidate_rule(MealType::Lunch, Goal::LoseMaintainMuscle);
        let plain = candidate_rule(MealType::Lunch, Goal::Maintain);
        assert_eq!(muscle.min_protein, Some(25.0));
        assert_eq!(plain.min_protein, Some(20.0));
    }

    #[test]
    fn test_filter_falls_back_to_full_catalog() {
        let catalog = vec![
            recipe("Huge", 2000.0, 1.0, 200.0, 90.0, 90),
            recipe("Bigger", 2500.0, 1.0, 250.0, 100.0, 90),
        ];
        let result = filter_candidates(&catalog, MealType::Snack, Goal::Lose, 200);
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_filter_keeps_matching_subset() {
        let catalog = vec![
            recipe("Yogurt", 150.0, 12.0, 10.0, 3.0, 2),
            recipe("Brownie", 400.0, 4.0, 50.0, 20.0, 30),
        ];
        let result = filter_candidates(&catalog, MealType::Snack, Goal::Lose, 200);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Yogurt");
    }

    #[test]
    fn test_filter_empty_catalog() {
        let result = filter_candidates(&[], MealType::Lunch, Goal::Maintain, 700);
        assert!(result.is_empty());
    }
}
