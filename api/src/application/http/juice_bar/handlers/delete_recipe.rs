use axum::extract::{Path, State};
use nutrilens_core::domain::recipes::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "juice-bar",
    summary = "Delete a saved recipe",
    description = "Removes exactly this recipe. The other saved recipes keep their order.",
    responses(
        (status = 200, body = DeleteRecipeResponse),
        (status = 404, description = "No saved recipe has this id")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    state
        .service
        .delete_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
