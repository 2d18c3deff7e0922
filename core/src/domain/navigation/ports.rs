use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, store::entities::View};

pub trait NavigationService: Send + Sync {
    fn current_view(&self) -> impl Future<Output = Result<View, CoreError>> + Send;

    fn set_view(&self, view: View) -> impl Future<Output = Result<View, CoreError>> + Send;
}
