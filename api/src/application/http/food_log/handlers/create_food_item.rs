use axum::extract::State;
use nutrilens_core::domain::{food_log::FoodLogService, nutrition::entities::FoodItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_log::validators::CreateFoodItemRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FoodItemResponse {
    pub data: FoodItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food-logs",
    summary = "Log food manually",
    responses(
        (status = 201, body = FoodItemResponse),
        (status = 400, body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
    request_body = CreateFoodItemRequest
)]
pub async fn create_food_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodItemRequest>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item = state.service.add_food_item(payload.into()).await?;

    Ok(Response::Created(FoodItemResponse { data: item }))
}
