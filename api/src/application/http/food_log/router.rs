use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_food_item::{__path_create_food_item, create_food_item},
    get_food_logs::{__path_get_food_logs, get_food_logs},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_food_logs, create_food_item))]
pub struct FoodLogApiDoc;

pub fn food_log_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/food-logs", state.args.server.root_path),
        get(get_food_logs).post(create_food_item),
    )
}
