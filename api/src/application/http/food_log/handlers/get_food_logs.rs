use axum::extract::State;
use nutrilens_core::domain::{food_log::FoodLogService, nutrition::entities::FoodItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FoodLogsResponse {
    pub data: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food-logs",
    summary = "List logged food",
    description = "Every logged item, oldest first.",
    responses(
        (status = 200, body = FoodLogsResponse)
    ),
)]
pub async fn get_food_logs(
    State(state): State<AppState>,
) -> Result<Response<FoodLogsResponse>, ApiError> {
    let items = state.service.get_food_logs().await?;

    Ok(Response::OK(FoodLogsResponse { data: items }))
}
