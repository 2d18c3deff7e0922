pub mod file_camera;

pub use file_camera::FileCamera;
