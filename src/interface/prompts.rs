use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Goal, NutritionProfile};
use crate::planner::constants::{activity_description, goal_description};

/// Minimum Jaro-Winkler similarity for a fuzzy food-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if !(value.is_finite() && value > 0.0) {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

/// Interactively collect a nutrition profile.
pub fn prompt_profile() -> Result<NutritionProfile> {
    let age = prompt_number("Age (years)", "30")?;
    let weight = prompt_number("Weight (kg)", "70")?;
    let height = prompt_number("Height (cm)", "170")?;

    let genders = [Gender::Male, Gender::Female, Gender::Other];
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&["male", "female", "other"])
        .default(0)
        .interact()?;

    let activity_labels: Vec<&str> = ActivityLevel::ALL
        .iter()
        .map(|a| activity_description(*a))
        .collect();
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(2)
        .interact()?;

    let goal_labels: Vec<&str> = Goal::ALL.iter().map(|g| goal_description(*g)).collect();
    let goal_idx = Select::new()
        .with_prompt("Goal")
        .items(&goal_labels)
        .default(0)
        .interact()?;

    let profile = NutritionProfile {
        age: age.round() as u32,
        weight,
        height,
        gender: genders[gender_idx],
        activity_level: ActivityLevel::ALL[activity_idx],
        goal: Goal::ALL[goal_idx],
    };
    profile.validate()?;
    Ok(profile)
}

/// Catalog names similar to `input`, best first.
pub fn fuzzy_candidates<'a>(input: &str, names: &[&'a str]) -> Vec<(&'a str, f64)> {
    let needle = input.to_lowercase();
    let mut candidates: Vec<(&str, f64)> = names
        .iter()
        .map(|n| (*n, jaro_winkler(&n.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
}

/// Map user-typed food names onto catalog names without prompting.
///
/// Exact (case-insensitive) matches win; otherwise the best fuzzy match is
/// used and logged. Names with no match are dropped with a warning.
pub fn resolve_exclusions(inputs: &[String], names: &[&str]) -> Vec<String> {
    let mut resolved = Vec::new();

    for input in inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(exact) = names.iter().find(|n| n.to_lowercase() == input.to_lowercase()) {
            resolved.push(exact.to_string());
            continue;
        }

        match fuzzy_candidates(input, names).first() {
            Some((name, score)) => {
                info!(input, matched = *name, score = *score, "excluding closest catalog food");
                resolved.push(name.to_string());
            }
            None => warn!(input, "no catalog food matches exclusion"),
        }
    }

    resolved
}

/// Prompt for foods to exclude, with fuzzy matching.
pub fn prompt_excluded_foods(names: &[&str]) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Food to exclude (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(exact) = names.iter().find(|n| n.to_lowercase() == input.to_lowercase()) {
            excluded.push(exact.to_string());
            println!("Excluded: {}", exact);
            continue;
        }

        let candidates = fuzzy_candidates(input, names);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                excluded.push(name.to_string());
                println!("Excluded: {}", name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(n, _)| n.to_string())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                excluded.push(options[selection].clone());
                println!("Excluded: {}", options[selection]);
            }
        }
    }

    Ok(excluded)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
