pub mod delete_recipe;
pub mod generate_recipe;
pub mod get_recipes;
pub mod save_recipe;
