use axum::extract::State;
use nutrilens_core::domain::{
    nutrition::entities::JuiceRecipe,
    recipes::{GenerateRecipeInput, RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    juice_bar::validators::GenerateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeResponse {
    pub data: JuiceRecipe,
}

#[utoipa::path(
    post,
    path = "/recipes/generate",
    tag = "juice-bar",
    summary = "Suggest a juice recipe",
    description = "Generates a recipe for the given taste preferences and health conditions. The recipe is not saved.",
    responses(
        (status = 200, body = RecipeResponse),
        (status = 502, description = "Recipe generation failed; retry"),
        (status = 503, description = "No model credential is configured")
    ),
    request_body = GenerateRecipeRequest
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .suggest_recipe(GenerateRecipeInput {
            preferences: payload.preferences,
            health_conditions: payload.health_conditions,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
