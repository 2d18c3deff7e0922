use image::RgbImage;

use crate::domain::{capture::entities::FacingMode, common::entities::app_errors::CoreError};

/// A live feed from an acquired camera.
#[cfg_attr(test, mockall::automock)]
pub trait VideoStream: Send {
    /// Native frame size. `(0, 0)` until the device has produced a frame.
    fn dimensions(&self) -> (u32, u32);

    fn grab_frame(&mut self) -> Result<RgbImage, CoreError>;

    /// Stops every track of the stream. Calling it twice is a no-op.
    fn stop(&mut self);

    fn is_live(&self) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait CameraDevice: Send + Sync {
    fn open(&self, facing: FacingMode) -> Result<Box<dyn VideoStream>, CoreError>;
}
