use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use image::RgbImage;
use tracing::{debug, warn};

use crate::domain::{
    capture::{
        entities::FacingMode,
        ports::{CameraDevice, VideoStream},
    },
    common::entities::app_errors::CoreError,
};

/// Camera backed by still-image files, one per facing mode.
///
/// Every grab re-reads the file, so replacing it on disk acts as a new frame.
/// A file that cannot be decoded reports a zero frame size, which the
/// capture flow treats as a device that is not ready yet.
#[derive(Debug, Clone, Default)]
pub struct FileCamera {
    rear_source: Option<PathBuf>,
    fallback_source: Option<PathBuf>,
    open_streams: Arc<AtomicUsize>,
}

impl FileCamera {
    pub fn new(rear_source: Option<PathBuf>, fallback_source: Option<PathBuf>) -> Self {
        Self {
            rear_source,
            fallback_source,
            open_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Streams opened and not yet stopped.
    pub fn open_streams(&self) -> usize {
        self.open_streams.load(Ordering::SeqCst)
    }

    fn source_for(&self, facing: FacingMode) -> Option<&PathBuf> {
        match facing {
            FacingMode::Environment => self.rear_source.as_ref(),
            FacingMode::Any => self.fallback_source.as_ref().or(self.rear_source.as_ref()),
        }
    }
}

impl CameraDevice for FileCamera {
    fn open(&self, facing: FacingMode) -> Result<Box<dyn VideoStream>, CoreError> {
        let path = self
            .source_for(facing)
            .filter(|path| path.is_file())
            .cloned()
            .ok_or_else(|| {
                CoreError::CameraUnavailable(format!("no {:?} capture device", facing))
            })?;

        let dimensions = image::image_dimensions(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Capture source has no readable frame");
            (0, 0)
        });

        self.open_streams.fetch_add(1, Ordering::SeqCst);
        debug!(path = %path.display(), ?facing, "File camera stream opened");

        Ok(Box::new(FileVideoStream {
            path,
            dimensions,
            live: true,
            open_streams: self.open_streams.clone(),
        }))
    }
}

struct FileVideoStream {
    path: PathBuf,
    dimensions: (u32, u32),
    live: bool,
    open_streams: Arc<AtomicUsize>,
}

impl VideoStream for FileVideoStream {
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn grab_frame(&mut self) -> Result<RgbImage, CoreError> {
        if !self.live {
            return Err(CoreError::CameraUnavailable("stream is stopped".to_string()));
        }

        image::open(&self.path)
            .map(|frame| frame.to_rgb8())
            .map_err(|e| CoreError::CameraUnavailable(format!("failed to read frame: {}", e)))
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.open_streams.fetch_sub(1, Ordering::SeqCst);
            debug!(path = %self.path.display(), "File camera stream stopped");
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}
