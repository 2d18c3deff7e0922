pub mod capture;
pub mod common;
pub mod food_analysis;
pub mod food_log;
pub mod navigation;
pub mod nutrition;
pub mod recipes;
pub mod store;
pub mod vitals;

#[cfg(test)]
pub(crate) mod test_support;
