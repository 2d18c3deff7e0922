use tokio::task;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Runs CPU-bound or device work on the blocking pool so request workers
/// stay free. A panic inside `work` surfaces as `InternalServerError`.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, CoreError>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work).await.map_err(|e| {
        error!(error = %e, "Blocking task did not complete");
        CoreError::InternalServerError
    })?
}
