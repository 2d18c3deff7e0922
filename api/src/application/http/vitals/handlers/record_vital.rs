use axum::extract::State;
use nutrilens_core::domain::{
    nutrition::entities::VitalLog,
    vitals::{RecordVitalInput, VitalsService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    vitals::validators::RecordVitalRequest,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VitalLogResponse {
    pub data: VitalLog,
}

#[utoipa::path(
    post,
    path = "",
    tag = "vitals",
    summary = "Record a vital sign",
    description = "Either `{\"type\": \"blood_pressure\", \"systolic\", \"diastolic\"}` or `{\"type\": \"blood_glucose\", \"value\"}`.",
    responses(
        (status = 201, body = VitalLogResponse),
        (status = 400, description = "Reading outside the plausible range")
    ),
    request_body = RecordVitalRequest
)]
pub async fn record_vital(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordVitalRequest>,
) -> Result<Response<VitalLogResponse>, ApiError> {
    let log = state
        .service
        .record_vital(RecordVitalInput {
            reading: payload.reading,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(VitalLogResponse { data: log }))
}
