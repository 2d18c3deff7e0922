use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("AI service credential is missing or invalid")]
    MissingCredential,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Recipe generation failed: {0}")]
    RecipeGenerationFailed(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Camera is not ready")]
    CameraNotReady,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("{0}")]
    Busy(String),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}
