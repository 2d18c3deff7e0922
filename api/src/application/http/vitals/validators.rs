use nutrilens_core::domain::nutrition::entities::VitalReading;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecordVitalRequest {
    pub reading: VitalReading,
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetVitalsParams {
    #[schema(example = 7)]
    pub limit: Option<usize>,
}
