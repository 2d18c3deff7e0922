pub mod log_food_image;
pub mod log_food_text;
pub mod scan_food;
