use nutrilens_core::domain::nutrition::entities::FoodCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LogFoodTextRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "description must be between 1 and 2000 characters"
    ))]
    pub description: String,
    #[serde(default)]
    pub category: Option<FoodCategory>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScanFoodRequest {
    #[serde(default)]
    pub category: Option<FoodCategory>,
}
