use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::WeeklyMealPlan;
use crate::shopping::ShoppingList;

/// Write one row per selected recipe across the week.
pub fn write_weekly_csv(plan: &WeeklyMealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "meal",
        "meal_target_calories",
        "recipe",
        "calories",
        "protein",
        "carbs",
        "fat",
    ])?;

    for day in &plan.days {
        for meal in &day.meals {
            for recipe in &meal.recipes {
                wtr.write_record([
                    day.date.format("%Y-%m-%d").to_string(),
                    meal.meal_type.label().to_string(),
                    meal.target_calories.to_string(),
                    recipe.name.clone(),
                    format!("{:.0}", recipe.calories),
                    format!("{:.1}", recipe.protein),
                    format!("{:.1}", recipe.carbs),
                    format!("{:.1}", recipe.fat),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "name", "quantity", "unit"])?;
    for item in &list.items {
        wtr.write_record([
            item.category.label().to_string(),
            item.name.clone(),
            format!("{:.1}", item.quantity),
            item.unit.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON of any plan value.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    Ok(())
}
