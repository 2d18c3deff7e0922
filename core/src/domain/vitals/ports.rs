use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::VitalLog, value_objects::VitalsTrend},
    vitals::value_objects::RecordVitalInput,
};

pub trait VitalsService: Send + Sync {
    fn record_vital(
        &self,
        input: RecordVitalInput,
    ) -> impl Future<Output = Result<VitalLog, CoreError>> + Send;

    fn get_vitals(&self) -> impl Future<Output = Result<Vec<VitalLog>, CoreError>> + Send;

    /// Last `limit` readings by time, plus the latest of each kind.
    fn vitals_trend(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<VitalsTrend, CoreError>> + Send;
}
