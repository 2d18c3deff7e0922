pub mod ports;
pub mod services;
pub mod value_objects;

pub use ports::FoodLogService;
pub use value_objects::*;
