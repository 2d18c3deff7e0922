use crate::domain::nutrition::entities::VitalReading;

pub const DEFAULT_TREND_LIMIT: usize = 7;

#[derive(Debug, Clone)]
pub struct RecordVitalInput {
    pub reading: VitalReading,
    pub notes: Option<String>,
}
