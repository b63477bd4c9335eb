//! Recipe selection for a single meal.

use tracing::debug;

use crate::models::RecipeWithNutrition;
use crate::planner::constants::{
    SINGLE_RECIPE_LOWER, SINGLE_RECIPE_UPPER, TOP_UP_CEILING, TOP_UP_STOP, UNDERSHOOT_RATIO,
};

/// Pick recipes whose combined calories approximate `target_calories`.
///
/// Multi-stage heuristic:
/// 1. A single recipe within ±15% of the target wins outright
/// 2. Otherwise take the largest recipe not above the target (or the
///    smallest overall if every recipe overshoots, and stop there)
/// 3. Top up with small recipes while staying under 110% of the target
/// 4. Still short of 85%: add the recipe closest to what is missing
///
/// Candidates are compared by calories, highest first; equal calories keep
/// their input order. Returns an empty list only for empty input.
pub fn select_recipes_for_meal<'a>(
    candidates: &[&'a RecipeWithNutrition],
    target_calories: f64,
) -> Vec<&'a RecipeWithNutrition> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&RecipeWithNutrition> = candidates.to_vec();
    sorted.sort_by(|a, b| b.calories.total_cmp(&a.calories));

    // Stage 1: single recipe close enough
    let lower = target_calories * SINGLE_RECIPE_LOWER;
    let upper = target_calories * SINGLE_RECIPE_UPPER;
    if let Some(recipe) = sorted
        .iter()
        .find(|r| r.calories >= lower && r.calories <= upper)
    {
        debug!(recipe = %recipe.name, target_calories, "single recipe within band");
        return vec![*recipe];
    }

    // Stage 2: largest fit, by position in the sorted list
    let mut taken = vec![false; sorted.len()];
    let largest_fit = sorted.iter().position(|r| r.calories <= target_calories);

    let first = match largest_fit {
        Some(idx) => idx,
        None => {
            let smallest = sorted[sorted.len() - 1];
            debug!(
                recipe = %smallest.name,
                target_calories,
                "every candidate overshoots; taking the smallest"
            );
            return vec![smallest];
        }
    };

    taken[first] = true;
    let mut selected = vec![first];
    let mut total = sorted[first].calories;

    // Stage 3: top up ascending
    if total < target_calories * UNDERSHOOT_RATIO {
        let mut ascending: Vec<usize> = (0..sorted.len()).filter(|&i| !taken[i]).collect();
        ascending.sort_by(|&a, &b| sorted[a].calories.total_cmp(&sorted[b].calories));

        for idx in ascending {
            if total + sorted[idx].calories <= target_calories * TOP_UP_CEILING {
                taken[idx] = true;
                selected.push(idx);
                total += sorted[idx].calories;

                if total >= target_calories * TOP_UP_STOP {
                    break;
                }
            }
        }
    }

    // Stage 4: closest remaining recipe to the gap
    if total < target_calories * UNDERSHOOT_RATIO {
        let remaining_target = target_calories - total;
        let closest = (0..sorted.len()).filter(|&i| !taken[i]).min_by(|&a, &b| {
            let diff_a = (remaining_target - sorted[a].calories).abs();
            let diff_b = (remaining_target - sorted[b].calories).abs();
            diff_a.total_cmp(&diff_b)
        });

        if let Some(idx) = closest {
            selected.push(idx);
            total += sorted[idx].calories;
        }
    }

    debug!(
        recipes = selected.len(),
        total_calories = total,
        target_calories,
        "composed meal"
    );

    selected.into_iter().map(|i| sorted[i]).collect()
}
