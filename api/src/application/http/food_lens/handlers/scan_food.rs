use axum::extract::State;
use nutrilens_core::domain::food_log::FoodLogService;

use crate::application::http::{
    food_lens::validators::ScanFoodRequest,
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
    path = "/scan",
    tag = "food-lens",
    summary = "Scan food with the camera",
    description = "Opens the rear camera (falling back to any camera), captures one frame, releases the camera and logs the analyzed food.",
    responses(
        (status = 201, body = FoodItemResponse),
        (status = 409, description = "Camera not ready yet or a scan is already running"),
        (status = 503, description = "No camera could be opened; retry")
    ),
    request_body = ScanFoodRequest
)]
pub async fn scan_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanFoodRequest>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item = state
        .service
        .scan_and_log(payload.category.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(FoodItemResponse { data: item }))
}
