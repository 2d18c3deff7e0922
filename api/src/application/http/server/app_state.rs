use std::sync::Arc;

use nutrilens_core::application::NutrilensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrilensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrilensService) -> Self {
        Self { args, service }
    }
}
