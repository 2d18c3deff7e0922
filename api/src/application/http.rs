pub mod dashboard;
pub mod food_lens;
pub mod food_log;
pub mod health;
pub mod juice_bar;
pub mod navigation;
pub mod server;
pub mod vitals;
