pub mod create_food_item;
pub mod get_food_logs;
