use std::sync::Arc;

use crate::domain::{common::busy::BusyFlag, store::services::AppStore};

/// Application service. Each domain module implements its service trait on
/// this struct, the same way every view reaches the same store.
#[derive(Clone)]
pub struct Service<LLM, CAM> {
    pub(crate) store: Arc<AppStore>,
    pub(crate) llm_client: LLM,
    pub(crate) camera: CAM,
    pub(crate) food_lens_busy: BusyFlag,
    pub(crate) juice_bar_busy: BusyFlag,
    pub(crate) camera_busy: BusyFlag,
}

impl<LLM, CAM> Service<LLM, CAM> {
    pub fn new(store: Arc<AppStore>, llm_client: LLM, camera: CAM) -> Self {
        Self {
            store,
            llm_client,
            camera,
            food_lens_busy: BusyFlag::new("food lens"),
            juice_bar_busy: BusyFlag::new("juice bar"),
            camera_busy: BusyFlag::new("camera"),
        }
    }

    pub fn store(&self) -> &Arc<AppStore> {
        &self.store
    }

    pub fn camera(&self) -> &CAM {
        &self.camera
    }
}
