use nutrilens_core::domain::nutrition::entities::{JuiceRecipe, MacroNutrients};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "preferences must be between 1 and 1000 characters"
    ))]
    pub preferences: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "health_conditions must be between 1 and 1000 characters"
    ))]
    pub health_conditions: String,
}

/// A recipe previously returned by the generator, sent back to be kept.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveRecipeRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1, message = "at least one instruction is required"))]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub macros: MacroNutrients,
}

impl From<SaveRecipeRequest> for JuiceRecipe {
    fn from(request: SaveRecipeRequest) -> Self {
        JuiceRecipe {
            id: request.id,
            name: request.name,
            description: request.description,
            ingredients: request.ingredients,
            instructions: request.instructions,
            benefits: request.benefits,
            macros: request.macros,
        }
    }
}
