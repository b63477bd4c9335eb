pub mod prompts;
pub mod render;

pub use prompts::{prompt_excluded_foods, prompt_profile, prompt_yes_no, resolve_exclusions};
pub use render::{
    display_daily_plan, display_intelligent_menu, display_nutrition_info, display_recipe,
    display_shopping_list, display_weekly_plan,
};
