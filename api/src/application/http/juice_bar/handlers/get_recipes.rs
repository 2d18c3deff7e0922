use axum::extract::State;
use nutrilens_core::domain::{nutrition::entities::JuiceRecipe, recipes::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipesResponse {
    pub data: Vec<JuiceRecipe>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "juice-bar",
    summary = "List saved recipes",
    responses(
        (status = 200, body = RecipesResponse)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
) -> Result<Response<RecipesResponse>, ApiError> {
    let recipes = state.service.get_recipes().await.map_err(ApiError::from)?;

    Ok(Response::OK(RecipesResponse { data: recipes }))
}
