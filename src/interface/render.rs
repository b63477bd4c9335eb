use crate::models::{DailyMealPlan, IntelligentMeal, RecipeDisplay, WeeklyMealPlan};
use crate::planner::NutritionInfo;
use crate::shopping::ShoppingList;

/// Display BMR, TDEE and daily targets.
pub fn display_nutrition_info(info: &NutritionInfo) {
    let t = &info.macro_targets;

    println!();
    println!("=== Nutrition Targets ===");
    println!();
    println!("Activity: {}", info.activity_level_description);
    println!("Goal:     {}", info.goal_description);
    println!();
    println!("BMR:      {:>5} kcal", info.bmr);
    println!("TDEE:     {:>5} kcal", info.tdee);
    println!("Target:   {:>5} kcal", t.calories);
    println!(
        "Macros:   P {}g | C {}g | F {}g ({} kcal)",
        t.protein,
        t.carbs,
        t.fat,
        t.macro_calories()
    );
    println!();
}

/// Display one day's meals in a formatted table.
pub fn display_daily_plan(plan: &DailyMealPlan) {
    println!();
    println!("=== Meal Plan for {} ===", plan.date.format("%A %Y-%m-%d"));
    println!();

    let max_name_len = plan
        .meals
        .iter()
        .flat_map(|m| m.recipes.iter().map(|r| r.name.len()))
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!(
            "{} (target {} kcal, planned {:.0} kcal)",
            meal.meal_type.label(),
            meal.target_calories,
            meal.total_calories
        );

        if meal.recipes.is_empty() {
            println!("    (no recipes available)");
        }

        for recipe in &meal.recipes {
            let display = RecipeDisplay::from_recipe(recipe);
            println!(
                "    {:<width$} - {:>4.0} kcal | P {:.0} C {:.0} F {:.0} | {} serving(s), {} min",
                recipe.name,
                recipe.calories,
                recipe.protein,
                recipe.carbs,
                recipe.fat,
                display.servings,
                display.total_time,
                width = max_name_len
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Calories: {:.0} / {} ({:+.0})",
        plan.total_calories,
        plan.target_calories,
        plan.calorie_gap()
    );
    println!(
        "Protein:  {:.0} / {} g",
        plan.total_protein, plan.target_protein
    );
    println!("Carbs:    {:.0} / {} g", plan.total_carbs, plan.target_carbs);
    println!("Fat:      {:.0} / {} g", plan.total_fat, plan.target_fat);
    println!();
}

pub fn display_weekly_plan(plan: &WeeklyMealPlan) {
    for day in &plan.days {
        display_daily_plan(day);
    }

    let days = plan.days.len().max(1) as f64;
    println!("=== Week Summary ===");
    println!("Days: {}", plan.days.len());
    println!("Average calories/day: {:.0}", plan.total_calories() / days);
    println!();
}

pub fn display_recipe(recipe: &RecipeDisplay) {
    println!();
    println!("=== {} ({}) ===", recipe.name, recipe.id);
    println!(
        "{} serving(s), {} min, {} ingredient(s)",
        recipe.servings, recipe.total_time, recipe.ingredient_count
    );
    println!(
        "Per serving: {} kcal | P {}g | C {}g | F {}g",
        recipe.calories_per_serving,
        recipe.protein_per_serving,
        recipe.carbs_per_serving,
        recipe.fat_per_serving
    );
    println!();
}

/// Display an ingredient-built menu.
pub fn display_intelligent_menu(meals: &[IntelligentMeal]) {
    if meals.iter().all(|m| m.ingredients.is_empty()) {
        println!("No menu generated (no foods match the dietary preferences).");
        return;
    }

    println!();
    println!("=== Intelligent Menu ===");

    for meal in meals {
        println!();
        println!(
            "{} - {} (target {:.0} kcal, ~{:.0} kcal)",
            meal.meal_type.label(),
            meal.name,
            meal.targets.calories,
            meal.estimated_calories()
        );
        for ing in &meal.ingredients {
            println!(
                "    {:>5.0} {:<4} {} [{}]",
                ing.quantity,
                ing.unit,
                ing.food.name,
                ing.food.category.label()
            );
        }
    }
    println!();
}

pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list: (empty)");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", list.len());

    let mut current = None;
    for item in &list.items {
        if current != Some(item.category) {
            println!();
            println!("[{}]", item.category.label());
            current = Some(item.category);
        }
        println!("  {:>7.1} {:<5} {}", item.quantity, item.unit, item.name);
    }
    println!();
}
