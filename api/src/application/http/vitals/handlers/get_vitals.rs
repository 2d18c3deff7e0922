use axum::extract::{Query, State};
use nutrilens_core::domain::{
    nutrition::value_objects::VitalsTrend,
    vitals::{VitalsService, value_objects::DEFAULT_TREND_LIMIT},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    vitals::validators::GetVitalsParams,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VitalsTrendResponse {
    pub data: VitalsTrend,
}

#[utoipa::path(
    get,
    path = "",
    tag = "vitals",
    summary = "Vitals trend",
    description = "The most recent readings, oldest first, with the latest blood pressure and blood glucose.",
    responses(
        (status = 200, body = VitalsTrendResponse)
    ),
    params(GetVitalsParams),
)]
pub async fn get_vitals(
    State(state): State<AppState>,
    Query(params): Query<GetVitalsParams>,
) -> Result<Response<VitalsTrendResponse>, ApiError> {
    let trend = state
        .service
        .vitals_trend(params.limit.unwrap_or(DEFAULT_TREND_LIMIT))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(VitalsTrendResponse { data: trend }))
}
