use axum::extract::{Multipart, State};
use nutrilens_core::domain::{
    food_log::{FoodLogService, LogFoodFromImageInput},
    nutrition::entities::FoodCategory,
};

use crate::application::http::{
    food_log::handlers::create_food_item::FoodItemResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

fn parse_category(value: &str) -> Result<FoodCategory, ApiError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase()))
        .map_err(|_| ApiError::BadRequest(format!("Unknown category: {}", value)))
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-lens",
    summary = "Log food from a photo",
    description = "Multipart form with an `image` field (JPEG or PNG) and an optional `category` field.",
    responses(
        (status = 201, body = FoodItemResponse),
        (status = 400, description = "Missing or undecodable image"),
        (status = 502, description = "The model failed or returned an unusable answer; retry")
    ),
)]
pub async fn log_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut category = FoodCategory::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "category" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read category: {}", e))
                })?;
                category = parse_category(&value)?;
            }
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let item = state
        .service
        .log_food_from_image(LogFoodFromImageInput {
            image_data,
            category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(FoodItemResponse { data: item }))
}
