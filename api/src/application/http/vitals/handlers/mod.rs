pub mod get_vitals;
pub mod record_vital;
