mod persistence;
mod store;

pub use persistence::{load_catalog, load_profile, save_catalog, CatalogFile, JsonCatalog};
pub use store::Catalog;

use crate::error::Result;
use crate::models::{FoodItem, RecipeWithNutrition};

/// Read access to the food and recipe catalog.
///
/// Implementations return fully hydrated, unfiltered data; all filtering
/// happens in the planner.
pub trait CatalogSource {
    fn fetch_recipes(&self) -> Result<Vec<RecipeWithNutrition>>;

    fn fetch_foods(&self) -> Result<Vec<FoodItem>>;
}
