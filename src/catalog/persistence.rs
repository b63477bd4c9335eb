use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogSource};
use crate::error::Result;
use crate::models::{FoodItem, NutritionProfile, RecipeWithNutrition};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub recipes: Vec<RecipeWithNutrition>,
}

/// Keep the last entry per key, preserving first-seen order.
fn dedup_last_wins<T, F: Fn(&T) -> String>(items: Vec<T>, key: F) -> Vec<T> {
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, T> = HashMap::new();
    for item in items {
        let k = key(&item);
        if seen.insert(k.clone(), item).is_none() {
            order.push(k);
        }
    }
    order
        .into_iter()
        .filter_map(|k| seen.remove(&k))
        .collect()
}

/// Load a catalog from a JSON file.
///
/// Foods are deduplicated by lowercase name and recipes by id; the last
/// occurrence wins.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let content = fs::read_to_string(path.as_ref())?;
    let raw: CatalogFile = serde_json::from_str(&content)?;

    let food_count = raw.foods.len();
    let recipe_count = raw.recipes.len();
    let foods = dedup_last_wins(raw.foods, |f| f.key());
    let recipes = dedup_last_wins(raw.recipes, |r| r.id.clone());

    if foods.len() != food_count || recipes.len() != recipe_count {
        warn!(
            dropped_foods = food_count - foods.len(),
            dropped_recipes = recipe_count - recipes.len(),
            "duplicate catalog entries dropped"
        );
    }
    debug!(
        foods = foods.len(),
        recipes = recipes.len(),
        path = %path.as_ref().display(),
        "loaded catalog"
    );

    Ok(CatalogFile { foods, recipes })
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &CatalogFile) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a nutrition profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<NutritionProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Catalog backed by a JSON file, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into an in-memory catalog.
    pub fn load(&self) -> Result<Catalog> {
        let file = load_catalog(&self.path)?;
        Ok(Catalog::new(file.foods, file.recipes))
    }
}

impl CatalogSource for JsonCatalog {
    fn fetch_recipes(&self) -> Result<Vec<RecipeWithNutrition>> {
        Ok(load_catalog(&self.path)?.recipes)
    }

    fn fetch_foods(&self) -> Result<Vec<FoodItem>> {
        Ok(load_catalog(&self.path)?.foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG_JSON: &str = r#"{
        "foods": [
            {"id": "1", "name": "Apple", "category": "fruit", "calories": 52, "protein": 0.3,
             "carbs": 14, "fat": 0.2, "commonPortionSize": 100, "commonPortionUnit": "g",
             "isVegan": true},
            {"id": "2", "name": "apple", "category": "fruit", "calories": 60, "protein": 0.3,
             "carbs": 15, "fat": 0.2}
        ],
        "recipes": [
            {"id": "r1", "name": "Porridge", "prepTime": 5, "cookTime": 10, "servings": 1,
             "calories": 350, "protein": 12, "carbs": 55, "fat": 8,
             "items": [{"food": {"id": "3", "name": "Oats", "category": "grain",
                        "calories": 150, "protein": 5, "carbs": 27, "fat": 3},
                        "quantity": 80, "unit": "g"}]}
        ]
    }"#;

    fn write_catalog() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let file = write_catalog();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.recipes.len(), 1);
        assert_eq!(catalog.recipes[0].total_time(), 15);
        assert_eq!(catalog.recipes[0].items[0].food.name, "Oats");

        let out = NamedTempFile::new().unwrap();
        save_catalog(out.path(), &catalog).unwrap();
        let reloaded = load_catalog(out.path()).unwrap();
        assert_eq!(reloaded.recipes, catalog.recipes);
        assert_eq!(reloaded.foods, catalog.foods);
    }

    #[test]
    fn test_deduplication_last_wins() {
        let file = write_catalog();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.foods.len(), 1);
        assert_eq!(catalog.foods[0].calories, 60.0);
    }

    #[test]
    fn test_json_catalog_source() {
        let file = write_catalog();
        let source = JsonCatalog::new(file.path());
        assert_eq!(source.fetch_recipes().unwrap().len(), 1);
        assert_eq!(source.load().unwrap().foods().len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, crate::error::PlannerError::Io(_)));
    }
}
