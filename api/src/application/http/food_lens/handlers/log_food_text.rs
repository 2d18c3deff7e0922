use axum::extract::State;
use nutrilens_core::domain::food_log::{FoodLogService, LogFoodFromTextInput};

use crate::application::http::{
    food_lens::validators::LogFoodTextRequest,
    food_log::handlers::create_food_item::FoodItemResponse,
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
    path = "/text",
    tag = "food-lens",
    summary = "Log food from a description",
    description = "Estimates the nutrition of a free-text meal description and logs it.",
    responses(
        (status = 201, body = FoodItemResponse),
        (status = 502, description = "The model failed or returned an unusable answer; retry"),
        (status = 503, description = "No model credential is configured")
    ),
    request_body = LogFoodTextRequest
)]
pub async fn log_food_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogFoodTextRequest>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item = state
        .service
        .log_food_from_text(LogFoodFromTextInput {
            description: payload.description,
            category: payload.category.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(FoodItemResponse { data: item }))
}
