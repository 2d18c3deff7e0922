use nutrilens_core::domain::store::entities::View;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetViewRequest {
    pub view: View,
}
