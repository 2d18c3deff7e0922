use base64::{Engine as _, engine::general_purpose};
use image::{RgbImage, codecs::jpeg::JpegEncoder, imageops};

use crate::domain::{capture::entities::CapturedImage, common::entities::app_errors::CoreError};

pub const ANALYSIS_JPEG_QUALITY: u8 = 70;
pub const THUMBNAIL_JPEG_QUALITY: u8 = 30;
pub const THUMBNAIL_MAX_EDGE: u32 = 160;

pub fn encode_jpeg(frame: &RgbImage, quality: u8) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(frame)
        .map_err(|e| CoreError::InvalidImage(format!("JPEG encoding failed: {}", e)))?;
    Ok(buffer)
}

fn thumbnail_size(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= THUMBNAIL_MAX_EDGE {
        return (width, height);
    }

    let scale = |edge: u32| ((edge as u64 * THUMBNAIL_MAX_EDGE as u64) / longest as u64).max(1) as u32;
    (scale(width), scale(height))
}

pub fn thumbnail_data_url(frame: &RgbImage) -> Result<String, CoreError> {
    let (width, height) = thumbnail_size(frame.width(), frame.height());
    let small = imageops::thumbnail(frame, width, height);
    let jpeg = encode_jpeg(&small, THUMBNAIL_JPEG_QUALITY)?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(jpeg)
    ))
}

impl CapturedImage {
    pub fn from_frame(frame: &RgbImage) -> Result<Self, CoreError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(CoreError::CameraNotReady);
        }

        Ok(Self {
            width: frame.width(),
            height: frame.height(),
            analysis_jpeg: encode_jpeg(frame, ANALYSIS_JPEG_QUALITY)?,
            thumbnail: thumbnail_data_url(frame)?,
        })
    }

    /// Decodes an uploaded image (JPEG or PNG) and re-encodes it the same way
    /// a camera frame would be.
    pub fn from_upload(bytes: &[u8]) -> Result<Self, CoreError> {
        let frame = image::load_from_memory(bytes)
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?
            .to_rgb8();

        Self::from_frame(&frame).map_err(|e| match e {
            CoreError::CameraNotReady => CoreError::InvalidImage("image has no pixels".to_string()),
            other => other,
        })
    }
}
