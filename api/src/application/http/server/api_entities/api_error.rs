use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// The model credential is missing or rejected. Nothing can be analyzed
    /// until the operator fixes the configuration.
    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    /// The same request may succeed if sent again.
    pub retryable: bool,
    /// The failure blocks every AI feature until configuration changes.
    pub blocking: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reload: bool,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, bool, bool) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", false, false),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", false, false),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT", false, false),
            ApiError::MissingCredential(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "E_MISSING_CREDENTIAL",
                false,
                true,
            ),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM_FAILED", true, false),
            ApiError::ServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "E_SERVICE_UNAVAILABLE",
                true,
                false,
            ),
            ApiError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                false,
                false,
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.parts().0
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingCredential => ApiError::MissingCredential(error.to_string()),
            CoreError::AnalysisFailed(_) => {
                tracing::warn!("Food analysis failed: {}", error);
                ApiError::BadGateway("Analysis failed, please try again".to_string())
            }
            CoreError::RecipeGenerationFailed(_) => {
                tracing::warn!("Recipe generation failed: {}", error);
                ApiError::BadGateway("Recipe generation failed, please try again".to_string())
            }
            CoreError::CameraUnavailable(_) => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::CameraNotReady | CoreError::Busy(_) | CoreError::Conflict(_) => {
                ApiError::Conflict(error.to_string())
            }
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Invalid(_) | CoreError::InvalidImage(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::ExternalServiceError(_)
            | CoreError::StorageError(_)
            | CoreError::InternalServerError => {
                tracing::error!("Unhandled core error: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, retryable, blocking) = self.parts();

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
            retryable,
            blocking,
            reload: false,
        };

        (status, Json(body)).into_response()
    }
}

/// Body returned when a handler panics. The process keeps serving.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");

    let body = ApiErrorResponse {
        code: "E_UNEXPECTED".to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message: "Something went wrong. Reload to continue.".to_string(),
        retryable: false,
        blocking: false,
        reload: true,
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_their_taxonomy() {
        let cases = [
            (CoreError::MissingCredential, StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::AnalysisFailed("garbled".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::RecipeGenerationFailed("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::CameraUnavailable("denied".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (CoreError::CameraNotReady, StatusCode::CONFLICT),
            (CoreError::Busy("food lens".to_string()), StatusCode::CONFLICT),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Invalid("x".to_string()), StatusCode::BAD_REQUEST),
            (
                CoreError::StorageError("disk full".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn missing_credential_is_blocking_and_upstream_failure_is_retryable() {
        assert_eq!(
            ApiError::from(CoreError::MissingCredential).parts(),
            (StatusCode::SERVICE_UNAVAILABLE, "E_MISSING_CREDENTIAL", false, true)
        );
        assert!(ApiError::from(CoreError::AnalysisFailed(String::new())).parts().2);
        assert!(ApiError::from(CoreError::CameraUnavailable(String::new())).parts().2);
    }

    #[test]
    fn upstream_failure_detail_stays_out_of_the_message() {
        let detail = "error sending request for url (https://host/models/m:generateContent?key=abc123)";

        let analysis = ApiError::from(CoreError::AnalysisFailed(detail.to_string()));
        assert_eq!(
            analysis,
            ApiError::BadGateway("Analysis failed, please try again".to_string())
        );

        let recipe = ApiError::from(CoreError::RecipeGenerationFailed(detail.to_string()));
        assert!(!recipe.to_string().contains("abc123"));
    }
}
