use axum::extract::State;
use nutrilens_core::domain::navigation::NavigationService;

use crate::application::http::{
    navigation::{handlers::get_view::ViewResponse, validators::SetViewRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "",
    tag = "view",
    summary = "Switch view",
    responses(
        (status = 200, body = ViewResponse)
    ),
    request_body = SetViewRequest
)]
pub async fn set_view(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetViewRequest>,
) -> Result<Response<ViewResponse>, ApiError> {
    let view = state
        .service
        .set_view(payload.view)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ViewResponse { data: view }))
}
