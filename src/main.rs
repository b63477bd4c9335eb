use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};

use menu_planner_rs::catalog::{
    load_catalog as read_catalog_file, load_profile, save_catalog, Catalog, JsonCatalog,
};
use menu_planner_rs::cli::{Cli, Command, DietArgs, OutputFormat, ProfileArgs};
use menu_planner_rs::error::{PlannerError, Result};
use menu_planner_rs::export::{write_json, write_shopping_csv, write_weekly_csv};
use menu_planner_rs::interface::{
    display_daily_plan, display_intelligent_menu, display_nutrition_info, display_recipe,
    display_shopping_list, display_weekly_plan, prompt_excluded_foods, prompt_profile,
    prompt_yes_no, resolve_exclusions,
};
use menu_planner_rs::logging;
use menu_planner_rs::models::{IntelligentMeal, NutritionProfile, RecipeDisplay};
use menu_planner_rs::planner::{
    calculate_target_calories, generate_daily_plan, generate_intelligent_menu,
    generate_weekly_plan, generate_weekly_plan_from_source, get_nutrition_info,
    DietaryPreferences, RngSource,
};
use menu_planner_rs::shopping::ShoppingList;

/// Where a command's result goes: stdout in the chosen format, plus an
/// optional JSON file.
struct Output<'a> {
    format: OutputFormat,
    json_out: Option<&'a Path>,
}

impl Output<'_> {
    fn emit<T: Serialize>(&self, value: &T, render: fn(&T)) -> Result<()> {
        match self.format {
            OutputFormat::Text => render(value),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        }
        if let Some(path) = self.json_out {
            write_json(value, path)?;
            info!(path = %path.display(), "wrote json");
        }
        Ok(())
    }
}

/// Ingredient-built menu, optionally with its shopping list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuOutput {
    meals: Vec<IntelligentMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shopping_list: Option<ShoppingList>,
}

fn display_menu_output(output: &MenuOutput) {
    display_intelligent_menu(&output.meals);
    if let Some(list) = &output.shopping_list {
        display_shopping_list(list);
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or_default();
    let out = Output {
        format: cli.format,
        json_out: cli.json_out.as_deref(),
    };
    let today = chrono::Local::now().date_naive();

    match command {
        Command::Targets => {
            let profile = resolve_profile(&cli.profile)?;
            out.emit(&get_nutrition_info(&profile), display_nutrition_info)
        }
        Command::Daily { date } => {
            let catalog = load_recipe_catalog(&JsonCatalog::new(&cli.catalog))?;
            let profile = resolve_profile(&cli.profile)?;
            let plan = generate_daily_plan(&profile, catalog.recipes(), date.unwrap_or(today));
            out.emit(&plan, display_daily_plan)
        }
        Command::Weekly { start, csv } => {
            let source = JsonCatalog::new(&cli.catalog);
            // Fail fast on an unusable catalog before fetching per day.
            load_recipe_catalog(&source)?;
            let profile = resolve_profile(&cli.profile)?;
            let plan =
                generate_weekly_plan_from_source(&profile, &source, start.unwrap_or(today))?;
            if let Some(path) = csv {
                write_weekly_csv(&plan, &path)?;
                info!(path = %path.display(), "wrote weekly plan");
            }
            out.emit(&plan, display_weekly_plan)
        }
        Command::Intelligent { diet, shopping } => {
            let catalog = load_catalog(&JsonCatalog::new(&cli.catalog))?;
            let profile = resolve_profile(&cli.profile)?;
            let menu = intelligent_menu(&catalog, &profile, &diet, cli.seed)?;
            let shopping_list = shopping.then(|| ShoppingList::from_intelligent_menu(&menu));
            let output = MenuOutput {
                meals: menu,
                shopping_list,
            };
            out.emit(&output, display_menu_output)
        }
        Command::Shopping { start, days, csv } => {
            let catalog = load_recipe_catalog(&JsonCatalog::new(&cli.catalog))?;
            let profile = resolve_profile(&cli.profile)?;
            let plan = generate_weekly_plan(&profile, catalog.recipes(), start.unwrap_or(today));
            let days = usize::from(days).min(plan.days.len());
            let list = ShoppingList::from_daily_plans(&plan.days[..days]);
            if let Some(path) = csv {
                write_shopping_csv(&list, &path)?;
                info!(path = %path.display(), "wrote shopping list");
            }
            out.emit(&list, display_shopping_list)
        }
        Command::Recipe { id } => {
            let catalog = load_recipe_catalog(&JsonCatalog::new(&cli.catalog))?;
            let recipe = catalog
                .get_recipe(&id)
                .ok_or_else(|| PlannerError::InvalidInput(format!("recipe not found: {}", id)))?;
            out.emit(&RecipeDisplay::from_recipe(recipe), display_recipe)
        }
        Command::Dedup { out: path } => {
            let file = read_catalog_file(&cli.catalog)?;
            save_catalog(&path, &file)?;
            println!(
                "Wrote {} foods and {} recipes to {}",
                file.foods.len(),
                file.recipes.len(),
                path.display()
            );
            Ok(())
        }
    }
}

/// Profile from file, from a complete set of flags, or interactively.
fn resolve_profile(args: &ProfileArgs) -> Result<NutritionProfile> {
    if let Some(path) = &args.profile_file {
        let profile = load_profile(path)?;
        profile.validate()?;
        return Ok(profile);
    }

    match (
        args.age,
        args.weight,
        args.height,
        args.gender,
        args.activity,
        args.goal,
    ) {
        (Some(age), Some(weight), Some(height), Some(gender), Some(activity_level), Some(goal)) => {
            let profile = NutritionProfile {
                age,
                weight,
                height,
                gender,
                activity_level,
                goal,
            };
            profile.validate()?;
            Ok(profile)
        }
        _ => prompt_profile(),
    }
}

/// Load the catalog and run the pre-checks the planner leaves to callers.
fn load_catalog(source: &JsonCatalog) -> Result<Catalog> {
    if !source.path().exists() {
        return Err(PlannerError::InvalidInput(format!(
            "catalog file not found: {}",
            source.path().display()
        )));
    }

    let catalog = source.load()?;
    if catalog.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }

    let invalid = catalog.invalid_entries();
    if !invalid.is_empty() {
        warn!(entries = ?invalid, "catalog entries with negative nutrition values");
    }

    info!(
        foods = catalog.foods().len(),
        recipes = catalog.recipes().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn load_recipe_catalog(source: &JsonCatalog) -> Result<Catalog> {
    let catalog = load_catalog(source)?;
    if catalog.recipes().is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }
    Ok(catalog)
}

/// Run the ingredient composer over the catalog's foods.
fn intelligent_menu(
    catalog: &Catalog,
    profile: &NutritionProfile,
    diet: &DietArgs,
    seed: Option<u64>,
) -> Result<Vec<IntelligentMeal>> {
    if catalog.foods().is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }

    let names = catalog.food_names();
    let mut excluded = resolve_exclusions(&diet.excluded, &names);
    if diet.interactive && prompt_yes_no("Exclude any foods?", false)? {
        excluded.extend(prompt_excluded_foods(&names)?);
    }

    let preferences = DietaryPreferences {
        vegetarian: diet.vegetarian,
        vegan: diet.vegan,
        gluten_free: diet.gluten_free,
        lactose_free: diet.lactose_free,
        nut_free: diet.nut_free,
        excluded_foods: excluded,
    };

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = RngSource(rng);

    let daily_calories = calculate_target_calories(profile) as f64;
    Ok(generate_intelligent_menu(
        catalog.foods(),
        daily_calories,
        &preferences,
        &mut source,
    ))
}
