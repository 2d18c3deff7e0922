pub mod get_view;
pub mod set_view;
