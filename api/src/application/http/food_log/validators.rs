use nutrilens_core::domain::nutrition::{
    entities::{FoodCategory, MacroNutrients},
    value_objects::NewFoodItem,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateFoodItemRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,
    #[serde(default)]
    pub category: Option<FoodCategory>,
    #[serde(flatten)]
    pub macros: MacroNutrients,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<CreateFoodItemRequest> for NewFoodItem {
    fn from(request: CreateFoodItemRequest) -> Self {
        NewFoodItem {
            name: request.name,
            category: request.category.unwrap_or_default(),
            macros: request.macros,
            image: request.image,
        }
    }
}
