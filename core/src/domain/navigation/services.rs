use crate::domain::{
    capture::ports::CameraDevice,
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    navigation::ports::NavigationService,
    store::entities::View,
};

impl<LLM, CAM> NavigationService for Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    async fn current_view(&self) -> Result<View, CoreError> {
        Ok(self.store.current_view().await)
    }

    async fn set_view(&self, view: View) -> Result<View, CoreError> {
        Ok(self.store.set_view(view).await)
    }
}
