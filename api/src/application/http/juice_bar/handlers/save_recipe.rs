use axum::extract::State;
use nutrilens_core::domain::recipes::RecipeService;

use crate::application::http::{
    juice_bar::{handlers::generate_recipe::RecipeResponse, validators::SaveRecipeRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "juice-bar",
    summary = "Save a recipe",
    responses(
        (status = 201, body = RecipeResponse),
        (status = 409, description = "A recipe with this id is already saved")
    ),
    request_body = SaveRecipeRequest
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveRecipeRequest>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_recipe(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RecipeResponse { data: recipe }))
}
