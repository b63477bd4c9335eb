//! Ingredient-by-ingredient meal building over the raw food catalog.
//!
//! Category and food choices are random so repeated runs give varied menus.
//! Inject a seeded [`RandomSource`] for reproducible output.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::models::{
    FoodCategory, FoodItem, IntelligentMeal, MealType, NutritionTargets, SelectedIngredient,
};
use crate::planner::constants::*;
use crate::planner::distribution::ingredient_meal_targets;

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        ((self.next() * len as f64).floor() as usize).min(len - 1)
    }
}

/// Adapter over any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Binary dietary flags plus explicit exclusions by food name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietaryPreferences {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub lactose_free: bool,
    pub nut_free: bool,
    pub excluded_foods: Vec<String>,
}

impl DietaryPreferences {
    /// Whether a food satisfies every requested flag and is not excluded.
    ///
    /// Exclusions compare names case-insensitively.
    pub fn allows(&self, food: &FoodItem) -> bool {
        if self.vegetarian && !food.is_vegetarian {
            return false;
        }
        if self.vegan && !food.is_vegan {
            return false;
        }
        if self.gluten_free && !food.is_gluten_free {
            return false;
        }
        if self.lactose_free && !food.is_lactose_free {
            return false;
        }
        if self.nut_free && !food.is_nut_free {
            return false;
        }
        let key = food.key();
        !self.excluded_foods.iter().any(|e| e.to_lowercase() == key)
    }

    pub fn filter_foods<'a>(&self, foods: &'a [FoodItem]) -> Vec<&'a FoodItem> {
        foods.iter().filter(|f| self.allows(f)).collect()
    }
}

/// Categories a meal type draws from.
#[derive(Debug, Clone, Copy)]
pub struct MealPreferences {
    pub preferred: &'static [FoodCategory],
    pub protein: &'static [FoodCategory],
    pub carbs: &'static [FoodCategory],
    pub fats: &'static [FoodCategory],
}

impl MealPreferences {
    pub fn for_meal(meal_type: MealType) -> Self {
        use FoodCategory::*;

        match meal_type {
            MealType::Breakfast => Self {
                preferred: &[Dairy, Fruit, Grain, Nut],
                protein: &[Protein, Dairy],
                carbs: &[Grain, Fruit],
                fats: &[Nut, Fat],
            },
            MealType::Lunch => Self {
                preferred: &[Protein, Carb, Vegetable],
                protein: &[Protein],
                carbs: &[Carb, Grain],
                fats: &[Fat, Nut],
            },
            MealType::Snack => Self {
                preferred: &[Fruit, Nut, Dairy],
                protein: &[Dairy, Protein],
                carbs: &[Fruit, Grain],
                fats: &[Nut, Fat],
            },
            MealType::Dinner => Self {
                preferred: &[Protein, Vegetable, Carb],
                protein: &[Protein],
                carbs: &[Carb, Vegetable],
                fats: &[Fat, Nut],
            },
        }
    }

    pub fn is_suitable(&self, category: FoodCategory) -> bool {
        self.preferred.contains(&category)
            || self.protein.contains(&category)
            || self.carbs.contains(&category)
            || self.fats.contains(&category)
    }
}

/// Grams of `food` that supply `calories`, clamped to the portion range.
///
/// Foods without a usable calorie density get the maximum portion.
pub fn ingredient_quantity(food: &FoodItem, calories: f64) -> f64 {
    let per_gram = food.calories_per_gram();
    if per_gram <= 0.0 || !per_gram.is_finite() {
        return MAX_INGREDIENT_GRAMS;
    }
    (calories / per_gram)
        .round()
        .clamp(MIN_INGREDIENT_GRAMS, MAX_INGREDIENT_GRAMS)
}

/// Build one meal's ingredient list.
///
/// Draws 3-5 ingredients, each from a category not used yet while any
/// remain. A drawn category with no suitable food adds nothing.
pub fn generate_meal_ingredients(
    foods: &[&FoodItem],
    meal_type: MealType,
    targets: &NutritionTargets,
    rng: &mut dyn RandomSource,
) -> Vec<SelectedIngredient> {
    let prefs = MealPreferences::for_meal(meal_type);
    let suitable: Vec<&FoodItem> = foods
        .iter()
        .copied()
        .filter(|f| prefs.is_suitable(f.category))
        .collect();

    let num_ingredients = MIN_INGREDIENTS + rng.pick_index(INGREDIENT_SPREAD);
    let calories_each = targets.calories / num_ingredients as f64;

    let mut selected = Vec::new();
    let mut used: HashSet<FoodCategory> = HashSet::new();

    for _ in 0..num_ingredients {
        if selected.len() >= MAX_INGREDIENTS {
            break;
        }

        let unused: Vec<FoodCategory> = ROTATION_CATEGORIES
            .into_iter()
            .filter(|c| !used.contains(c))
            .collect();
        let category = if unused.is_empty() {
            ROTATION_CATEGORIES[rng.pick_index(ROTATION_CATEGORIES.len())]
        } else {
            unused[rng.pick_index(unused.len())]
        };

        let in_category: Vec<&FoodItem> = suitable
            .iter()
            .copied()
            .filter(|f| f.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        let food = in_category[rng.pick_index(in_category.len())];
        selected.push(SelectedIngredient {
            food: food.clone(),
            quantity: ingredient_quantity(food, calories_each),
            unit: food.common_portion_unit.clone(),
        });
        used.insert(category);
    }

    debug!(
        meal = meal_type.label(),
        suitable = suitable.len(),
        ingredients = selected.len(),
        "generated ingredient meal"
    );
    selected
}

/// Random display name for an ingredient-built meal.
pub fn meal_name(meal_type: MealType, rng: &mut dyn RandomSource) -> String {
    let names = meal_names(meal_type);
    names[rng.pick_index(names.len())].to_string()
}

/// Build a full day of ingredient-based meals.
pub fn generate_intelligent_menu(
    foods: &[FoodItem],
    daily_calories: f64,
    preferences: &DietaryPreferences,
    rng: &mut dyn RandomSource,
) -> Vec<IntelligentMeal> {
    let available = preferences.filter_foods(foods);
    debug!(
        available = available.len(),
        catalog = foods.len(),
        daily_calories,
        "applied dietary preferences"
    );

    ingredient_meal_targets(daily_calories)
        .into_iter()
        .map(|(meal_type, targets)| {
            let ingredients = generate_meal_ingredients(&available, meal_type, &targets, rng);
            IntelligentMeal {
                meal_type,
                name: meal_name(meal_type, rng),
                targets,
                ingredients,
            }
        })
        .collect()
}
