use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Device preference passed when requesting a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Rear-facing camera.
    Environment,
    /// Whatever capture device is available.
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaptureState {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Capturing,
}

/// A frozen frame, encoded twice: once for analysis and once for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    /// Full resolution JPEG at analysis quality.
    pub analysis_jpeg: Vec<u8>,
    /// Downscaled low quality JPEG as a `data:` URL.
    pub thumbnail: String,
}
