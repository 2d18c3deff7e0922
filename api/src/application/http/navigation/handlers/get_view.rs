use axum::extract::State;
use nutrilens_core::domain::{navigation::NavigationService, store::entities::View};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ViewResponse {
    pub data: View,
}

#[utoipa::path(
    get,
    path = "",
    tag = "view",
    summary = "Current view",
    responses(
        (status = 200, body = ViewResponse)
    ),
)]
pub async fn get_view(State(state): State<AppState>) -> Result<Response<ViewResponse>, ApiError> {
    let view = state.service.current_view().await.map_err(ApiError::from)?;

    Ok(Response::OK(ViewResponse { data: view }))
}
