//! Shopping list aggregation over generated plans.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{DailyMealPlan, FoodCategory, FoodItem, IntelligentMeal};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub food_id: String,
    pub name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    pub unit: String,
}

/// Ingredient quantities summed per food and unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
}

#[derive(Default)]
struct Aggregator {
    /// (food id, unit) to index in `items`.
    index: HashMap<(String, String), usize>,
    items: Vec<ShoppingListItem>,
}

impl Aggregator {
    fn add(&mut self, food: &FoodItem, quantity: f64, unit: &str) {
        let key = (food.id.clone(), unit.to_string());
        match self.index.get(&key) {
            Some(&i) => self.items[i].quantity += quantity,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(ShoppingListItem {
                    food_id: food.id.clone(),
                    name: food.name.clone(),
                    category: food.category,
                    quantity,
                    unit: unit.to_string(),
                });
            }
        }
    }

    fn finish(mut self) -> ShoppingList {
        self.items
            .sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        ShoppingList { items: self.items }
    }
}

impl ShoppingList {
    /// Aggregate every recipe item across the given days.
    ///
    /// A recipe selected twice contributes its items twice.
    pub fn from_daily_plans(days: &[DailyMealPlan]) -> Self {
        let mut agg = Aggregator::default();
        for day in days {
            for meal in &day.meals {
                for recipe in &meal.recipes {
                    for item in &recipe.items {
                        agg.add(&item.food, item.quantity, &item.unit);
                    }
                }
            }
        }
        agg.finish()
    }

    pub fn from_intelligent_menu(meals: &[IntelligentMeal]) -> Self {
        let mut agg = Aggregator::default();
        for meal in meals {
            for ingredient in &meal.ingredients {
                agg.add(&ingredient.food, ingredient.quantity, &ingredient.unit);
            }
        }
        agg.finish()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{
        MacroTargets, MealPlan, MealType, RecipeItem, RecipeWithNutrition, SelectedIngredient,
        NutritionTargets,
    };

    fn food(id: &str, name: &str, category: FoodCategory) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            calories: 100.0,
            protein: 5.0,
            carbs: 10.0,
            fat: 2.0,
            common_portion_size: 100.0,
            common_portion_unit: "g".to_string(),
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: true,
            is_lactose_free: true,
            is_nut_free: true,
            tags: vec![],
        }
    }

    fn recipe(id: &str, items: Vec<RecipeItem>) -> RecipeWithNutrition {
        RecipeWithNutrition {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            instructions: None,
            prep_time: None,
            cook_time: None,
            servings: 1,
            calories: 400.0,
            protein: 20.0,
            carbs: 40.0,
            fat: 10.0,
            items,
        }
    }

    fn item(food: FoodItem, quantity: f64, unit: &str) -> RecipeItem {
        RecipeItem {
            food,
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_aggregates_by_food_and_unit() {
        let rice = food("f1", "Rice", FoodCategory::Carb);
        let egg = food("f2", "Egg", FoodCategory::Protein);

        let r1 = recipe("r1", vec![item(rice.clone(), 100.0, "g"), item(egg.clone(), 2.0, "unit")]);
        let r2 = recipe("r2", vec![item(rice.clone(), 50.0, "g"), item(rice.clone(), 1.0, "cup")]);

        let targets = MacroTargets {
            calories: 2000,
            protein: 150,
            carbs: 200,
            fat: 67,
        };
        let day = DailyMealPlan::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            vec![
                MealPlan::new(MealType::Lunch, 700, vec![r1]),
                MealPlan::new(MealType::Dinner, 600, vec![r2.clone(), r2]),
            ],
            &targets,
        );

        let list = ShoppingList::from_daily_plans(&[day]);
        assert_eq!(list.len(), 3);
        // Sorted by category (protein before carb), then name.
        assert_eq!(list.items[0].name, "Egg");
        let grams = list
            .items
            .iter()
            .find(|i| i.name == "Rice" && i.unit == "g")
            .unwrap();
        assert_eq!(grams.quantity, 200.0);
        let cups = list.items.iter().find(|i| i.unit == "cup").unwrap();
        assert_eq!(cups.quantity, 2.0);
    }

    #[test]
    fn test_from_intelligent_menu() {
        let apple = food("f3", "Apple", FoodCategory::Fruit);
        let meals = vec![
            IntelligentMeal {
                meal_type: MealType::Breakfast,
                name: "Healthy Breakfast".to_string(),
                targets: NutritionTargets::default(),
                ingredients: vec![SelectedIngredient {
                    food: apple.clone(),
                    quantity: 120.0,
                    unit: "g".to_string(),
                }],
            },
            IntelligentMeal {
                meal_type: MealType::Snack,
                name: "Healthy Snack".to_string(),
                targets: NutritionTargets::default(),
                ingredients: vec![SelectedIngredient {
                    food: apple,
                    quantity: 80.0,
                    unit: "g".to_string(),
                }],
            },
        ];
        let list = ShoppingList::from_intelligent_menu(&meals);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].quantity, 200.0);
    }

    #[test]
    fn test_empty_plan_gives_empty_list() {
        assert!(ShoppingList::from_daily_plans(&[]).is_empty());
    }
}
