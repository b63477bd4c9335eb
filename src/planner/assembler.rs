//! Day and week assembly on top of the filter and composer.

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::{
    DailyMealPlan, Goal, MealPlan, MealType, NutritionProfile, RecipeWithNutrition,
    WeeklyMealPlan,
};
use crate::planner::calculations::calculate_macro_targets;
use crate::planner::composer::select_recipes_for_meal;
use crate::planner::constants::{
    CORRECTIVE_SNACK_MAX, CORRECTIVE_SNACK_MIN, DAILY_SHORTFALL_RATIO, DAYS_PER_WEEK,
};
use crate::planner::distribution::MealDistribution;
use crate::planner::filter::filter_candidates;

/// Filter and compose one meal slot.
pub fn compose_meal(
    recipes: &[RecipeWithNutrition],
    meal_type: MealType,
    goal: Goal,
    target_calories: i32,
) -> MealPlan {
    let candidates = filter_candidates(recipes, meal_type, goal, target_calories);
    let selected = select_recipes_for_meal(&candidates, target_calories as f64);
    MealPlan::new(
        meal_type,
        target_calories,
        selected.into_iter().cloned().collect(),
    )
}

/// Catalog recipe closest to `calories_needed` within the corrective band.
///
/// Ties go to the earlier catalog entry.
pub fn find_corrective_snack(
    recipes: &[RecipeWithNutrition],
    calories_needed: f64,
) -> Option<&RecipeWithNutrition> {
    let min = calories_needed * CORRECTIVE_SNACK_MIN;
    let max = calories_needed * CORRECTIVE_SNACK_MAX;

    recipes
        .iter()
        .filter(|r| r.calories >= min && r.calories <= max)
        .min_by(|a, b| {
            let diff_a = (a.calories - calories_needed).abs();
            let diff_b = (b.calories - calories_needed).abs();
            diff_a.total_cmp(&diff_b)
        })
}

/// Generate one day's plan from an already fetched recipe catalog.
///
/// Slots are planned breakfast, lunch, dinner, snack. A day that ends
/// below 85% of its calorie target gets one extra snack when the catalog
/// has a recipe in range; otherwise it is returned short.
pub fn generate_daily_plan(
    profile: &NutritionProfile,
    recipes: &[RecipeWithNutrition],
    date: NaiveDate,
) -> DailyMealPlan {
    let targets = calculate_macro_targets(profile);
    let distribution = MealDistribution::for_goal(profile.goal);

    let mut meals: Vec<MealPlan> = MealType::ALL
        .into_iter()
        .map(|meal_type| {
            let slot_target = distribution.slot_target(targets.calories, meal_type);
            compose_meal(recipes, meal_type, profile.goal, slot_target)
        })
        .collect();

    let total: f64 = meals.iter().map(|m| m.total_calories).sum();
    let daily_target = targets.calories as f64;

    if total < daily_target * DAILY_SHORTFALL_RATIO {
        let calories_needed = daily_target - total;
        match find_corrective_snack(recipes, calories_needed) {
            Some(snack) => {
                info!(
                    %date,
                    recipe = %snack.name,
                    calories_needed,
                    "adding corrective snack"
                );
                meals.push(MealPlan::new(
                    MealType::Snack,
                    calories_needed.round() as i32,
                    vec![snack.clone()],
                ));
            }
            None => {
                debug!(%date, calories_needed, "no corrective snack in range");
            }
        }
    }

    DailyMealPlan::new(date, meals, &targets)
}

/// Dates `start, start+1, ..., start+6`.
///
/// Stops early at the end of the representable calendar, so a start within
/// six days of `NaiveDate::MAX` yields fewer than seven dates.
pub fn week_dates(start: NaiveDate) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = (0..DAYS_PER_WEEK)
        .map_while(|offset| start.checked_add_days(Days::new(offset as u64)))
        .collect();

    if dates.len() < DAYS_PER_WEEK as usize {
        warn!(%start, days = dates.len(), "week truncated at the end of the calendar");
    }
    dates
}

/// Generate seven independent daily plans from one catalog.
pub fn generate_weekly_plan(
    profile: &NutritionProfile,
    recipes: &[RecipeWithNutrition],
    start_date: NaiveDate,
) -> WeeklyMealPlan {
    let days = week_dates(start_date)
        .into_iter()
        .map(|date| generate_daily_plan(profile, recipes, date))
        .collect();

    WeeklyMealPlan { start_date, days }
}

/// Like [`generate_weekly_plan`], fetching the catalog once per day.
///
/// Callers that already hold the catalog should prefer the slice variant.
pub fn generate_weekly_plan_from_source(
    profile: &NutritionProfile,
    source: &dyn CatalogSource,
    start_date: NaiveDate,
) -> Result<WeeklyMealPlan> {
    let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);
    for date in week_dates(start_date) {
        let recipes = source.fetch_recipes()?;
        days.push(generate_daily_plan(profile, &recipes, date));
    }

    Ok(WeeklyMealPlan { start_date, days })
}
