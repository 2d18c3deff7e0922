use tracing::{debug, info, warn};

use crate::domain::{
    capture::{
        entities::{CaptureState, CapturedImage, FacingMode},
        ports::{CameraDevice, VideoStream},
    },
    common::entities::app_errors::CoreError,
};

/// Owns an acquired camera stream and stops it when released or dropped.
pub struct StreamGuard {
    stream: Option<Box<dyn VideoStream>>,
}

impl StreamGuard {
    pub fn new(stream: Box<dyn VideoStream>) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    pub fn stream(&self) -> Option<&dyn VideoStream> {
        self.stream.as_deref()
    }

    pub fn stream_mut(&mut self) -> Option<&mut (dyn VideoStream + 'static)> {
        self.stream.as_deref_mut()
    }

    pub fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("camera stream released");
        }
    }
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Camera lifecycle for a single scan.
///
/// `Idle -> Requesting -> Streaming -> Capturing -> Idle`. A failed capture
/// returns to `Streaming`; closing or a failed start returns to `Idle`. The
/// stream lives in a [`StreamGuard`], so dropping the flow on any path
/// releases the device.
pub struct CaptureFlow<'a, D: CameraDevice> {
    device: &'a D,
    state: CaptureState,
    guard: Option<StreamGuard>,
    last_error: Option<CoreError>,
}

impl<'a, D: CameraDevice> CaptureFlow<'a, D> {
    pub fn new(device: &'a D) -> Self {
        Self {
            device,
            state: CaptureState::Idle,
            guard: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Error from the last failed start or capture, kept for a retry prompt.
    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }

    /// True while a stream is held and the device still reports it live.
    pub fn is_streaming(&self) -> bool {
        self.guard
            .as_ref()
            .and_then(StreamGuard::stream)
            .is_some_and(|stream| stream.is_live())
    }

    pub fn start(&mut self) -> Result<(), CoreError> {
        if self.state == CaptureState::Streaming {
            return Ok(());
        }

        self.state = CaptureState::Requesting;
        self.last_error = None;

        let stream = match self.device.open(FacingMode::Environment) {
            Ok(stream) => stream,
            Err(rear_err) => {
                warn!(error = %rear_err, "Rear camera unavailable, falling back to any device");

                match self.device.open(FacingMode::Any) {
                    Ok(stream) => stream,
                    Err(err) => {
                        let err = match err {
                            CoreError::CameraUnavailable(reason) => {
                                CoreError::CameraUnavailable(reason)
                            }
                            other => CoreError::CameraUnavailable(other.to_string()),
                        };
                        warn!(error = %err, "No capture device could be opened");
                        self.state = CaptureState::Idle;
                        self.last_error = Some(err.clone());
                        return Err(err);
                    }
                }
            }
        };

        let (width, height) = stream.dimensions();
        info!(width, height, "Camera stream started");

        self.guard = Some(StreamGuard::new(stream));
        self.state = CaptureState::Streaming;
        Ok(())
    }

    /// Freezes the current frame. On success the stream is released.
    pub fn capture(&mut self) -> Result<CapturedImage, CoreError> {
        if self.state != CaptureState::Streaming || !self.is_streaming() {
            return Err(CoreError::CameraNotReady);
        }

        let stream = self
            .guard
            .as_mut()
            .and_then(StreamGuard::stream_mut)
            .ok_or(CoreError::CameraNotReady)?;

        let (width, height) = stream.dimensions();
        if width == 0 || height == 0 {
            warn!("Capture requested before the camera reported a frame size");
            return Err(CoreError::CameraNotReady);
        }

        self.state = CaptureState::Capturing;

        let captured = stream
            .grab_frame()
            .and_then(|frame| CapturedImage::from_frame(&frame));

        match captured {
            Ok(image) => {
                info!(width = image.width, height = image.height, "Frame captured");
                self.close();
                Ok(image)
            }
            Err(err) => {
                warn!(error = %err, "Frame capture failed");
                self.state = CaptureState::Streaming;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn close(&mut self) {
        if let Some(mut guard) = self.guard.take() {
            guard.release();
        }
        self.state = CaptureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use image::RgbImage;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::capture::ports::{MockCameraDevice, MockVideoStream};

    fn live_stream(width: u32, height: u32, stops: Arc<AtomicUsize>) -> MockVideoStream {
        let mut stream = MockVideoStream::new();
        stream.expect_dimensions().return_const((width, height));
        stream
            .expect_grab_frame()
            .returning(move || Ok(RgbImage::new(width.max(1), height.max(1))));
        stream.expect_is_live().return_const(true);
        stream.expect_stop().times(1).returning(move || {
            stops.fetch_add(1, Ordering::SeqCst);
        });
        stream
    }

    fn camera_with(stream: MockVideoStream) -> MockCameraDevice {
        let mut camera = MockCameraDevice::new();
        let mut stream = Some(stream);
        camera
            .expect_open()
            .with(eq(FacingMode::Environment))
            .times(1)
            .returning(move |_| {
                stream
                    .take()
                    .map(|s| Box::new(s) as Box<dyn VideoStream>)
                    .ok_or(CoreError::CameraUnavailable("already open".into()))
            });
        camera
    }

    #[test]
    fn successful_capture_releases_the_stream() {
        let stops = Arc::new(AtomicUsize::new(0));
        let camera = camera_with(live_stream(640, 480, stops.clone()));
        let mut flow = CaptureFlow::new(&camera);

        flow.start().unwrap();
        assert_eq!(flow.state(), CaptureState::Streaming);

        let image = flow.capture().unwrap();

        assert_eq!((image.width, image.height), (640, 480));
        assert_eq!(flow.state(), CaptureState::Idle);
        assert!(!flow.is_streaming());
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_releases_the_stream() {
        let stops = Arc::new(AtomicUsize::new(0));
        let camera = camera_with(live_stream(640, 480, stops.clone()));
        let mut flow = CaptureFlow::new(&camera);

        flow.start().unwrap();
        flow.close();

        assert_eq!(flow.state(), CaptureState::Idle);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_the_flow_releases_the_stream() {
        let stops = Arc::new(AtomicUsize::new(0));
        let camera = camera_with(live_stream(640, 480, stops.clone()));

        {
            let mut flow = CaptureFlow::new(&camera);
            flow.start().unwrap();
        }

        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn capture_before_frame_size_is_known_is_not_ready() {
        let stops = Arc::new(AtomicUsize::new(0));
        let camera = camera_with(live_stream(0, 0, stops.clone()));
        let mut flow = CaptureFlow::new(&camera);

        flow.start().unwrap();
        assert_eq!(flow.capture(), Err(CoreError::CameraNotReady));
        assert_eq!(flow.state(), CaptureState::Streaming);
        assert_eq!(stops.load(Ordering::SeqCst), 0);

        drop(flow);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn capture_while_idle_is_not_ready() {
        let camera = MockCameraDevice::new();
        let mut flow = CaptureFlow::new(&camera);

        assert_eq!(flow.capture(), Err(CoreError::CameraNotReady));
    }

    #[test]
    fn falls_back_to_any_device_when_rear_camera_fails() {
        let stops = Arc::new(AtomicUsize::new(0));
        let mut stream = Some(live_stream(320, 240, stops.clone()));
        let mut camera = MockCameraDevice::new();
        camera
            .expect_open()
            .with(eq(FacingMode::Environment))
            .times(1)
            .returning(|_| Err(CoreError::CameraUnavailable("no rear camera".into())));
        camera
            .expect_open()
            .with(eq(FacingMode::Any))
            .times(1)
            .returning(move |_| {
                stream
                    .take()
                    .map(|s| Box::new(s) as Box<dyn VideoStream>)
                    .ok_or(CoreError::CameraUnavailable("already open".into()))
            });

        let mut flow = CaptureFlow::new(&camera);
        flow.start().unwrap();
        let image = flow.capture().unwrap();

        assert_eq!(image.width, 320);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn both_devices_failing_leaves_a_retryable_idle_state() {
        let mut camera = MockCameraDevice::new();
        camera
            .expect_open()
            .times(2)
            .returning(|_| Err(CoreError::CameraUnavailable("permission denied".into())));

        let mut flow = CaptureFlow::new(&camera);
        let err = flow.start().unwrap_err();

        assert!(matches!(err, CoreError::CameraUnavailable(_)));
        assert_eq!(flow.state(), CaptureState::Idle);
        assert_eq!(flow.last_error(), Some(&err));
        assert!(!flow.is_streaming());
    }

    #[test]
    fn failed_grab_returns_to_streaming_and_keeps_the_stream() {
        let stops = Arc::new(AtomicUsize::new(0));
        let stops_in_mock = stops.clone();
        let mut stream = MockVideoStream::new();
        stream.expect_dimensions().return_const((640u32, 480u32));
        stream
            .expect_grab_frame()
            .returning(|| Err(CoreError::CameraUnavailable("frame dropped".into())));
        stream.expect_is_live().return_const(true);
        stream.expect_stop().times(1).returning(move || {
            stops_in_mock.fetch_add(1, Ordering::SeqCst);
        });
        let camera = camera_with(stream);

        let mut flow = CaptureFlow::new(&camera);
        flow.start().unwrap();

        assert!(flow.capture().is_err());
        assert_eq!(flow.state(), CaptureState::Streaming);
        assert!(flow.is_streaming());
        assert_eq!(stops.load(Ordering::SeqCst), 0);

        flow.close();
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stream_that_went_dark_is_not_streaming() {
        let stops = Arc::new(AtomicUsize::new(0));
        let stops_in_mock = stops.clone();
        let mut stream = MockVideoStream::new();
        stream.expect_dimensions().return_const((640u32, 480u32));
        stream.expect_is_live().return_const(false);
        stream.expect_stop().times(1).returning(move || {
            stops_in_mock.fetch_add(1, Ordering::SeqCst);
        });
        let camera = camera_with(stream);

        let mut flow = CaptureFlow::new(&camera);
        flow.start().unwrap();

        assert_eq!(flow.state(), CaptureState::Streaming);
        assert!(!flow.is_streaming());
        assert_eq!(flow.capture(), Err(CoreError::CameraNotReady));

        drop(flow);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }
}
