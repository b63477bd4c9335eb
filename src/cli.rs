use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{ActivityLevel, Gender, Goal};

/// Menu planner: nutrition targets, daily and weekly menus, shopping lists.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file (foods and recipes).
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Seed for the ingredient composer; omit for varied menus.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format on stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the command's result as pretty JSON to this file.
    #[arg(long = "json", global = true, value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Profile given on the command line. Without the full set it is prompted for.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Load the profile from a JSON file instead.
    #[arg(long = "profile", global = true)]
    pub profile_file: Option<PathBuf>,

    #[arg(long, global = true)]
    pub age: Option<u32>,

    /// Weight in kg.
    #[arg(long, global = true)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long, global = true)]
    pub height: Option<f64>,

    #[arg(long, global = true, value_enum)]
    pub gender: Option<Gender>,

    #[arg(long, global = true, value_enum)]
    pub activity: Option<ActivityLevel>,

    #[arg(long, global = true, value_enum)]
    pub goal: Option<Goal>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct DietArgs {
    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub vegan: bool,

    #[arg(long)]
    pub gluten_free: bool,

    #[arg(long)]
    pub lactose_free: bool,

    #[arg(long)]
    pub nut_free: bool,

    /// Food to leave out (repeatable, fuzzy-matched).
    #[arg(long = "exclude")]
    pub excluded: Vec<String>,

    /// Ask for exclusions interactively.
    #[arg(long)]
    pub interactive: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show BMR, TDEE and macro targets for the profile.
    Targets,

    /// Generate a recipe-based plan for one day.
    Daily {
        /// Plan date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Generate recipe-based plans for seven consecutive days.
    Weekly {
        /// First day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Also write the week to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Build a menu ingredient by ingredient from the food catalog.
    Intelligent {
        #[command(flatten)]
        diet: DietArgs,

        /// Also list what to buy for the menu.
        #[arg(long)]
        shopping: bool,
    },

    /// Aggregate the ingredients of a generated week into a shopping list.
    Shopping {
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of days to shop for (1-7).
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=7))]
        days: u8,

        /// Also write the list to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show one catalog recipe per serving.
    Recipe {
        /// Recipe id as stored in the catalog.
        id: String,
    },

    /// Write a copy of the catalog with duplicate foods and recipes removed.
    Dedup {
        /// Destination file; may be the catalog itself.
        #[arg(long)]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Targets
    }
}
