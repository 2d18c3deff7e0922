use tracing::{info, instrument};

use crate::domain::{
    capture::ports::CameraDevice,
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    nutrition::{
        entities::VitalLog,
        value_objects::VitalsTrend,
    },
    vitals::{ports::VitalsService, value_objects::RecordVitalInput},
};

impl<LLM, CAM> VitalsService for Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    #[instrument(skip(self, input), fields(reading = ?input.reading))]
    async fn record_vital(&self, input: RecordVitalInput) -> Result<VitalLog, CoreError> {
        input.reading.validate()?;

        let notes = input
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let log = self.store.append_vital(VitalLog::new(input.reading, notes)).await;
        info!(vital_id = %log.id, "Vital recorded");

        Ok(log)
    }

    async fn get_vitals(&self) -> Result<Vec<VitalLog>, CoreError> {
        Ok(self.store.vitals().await)
    }

    async fn vitals_trend(&self, limit: usize) -> Result<VitalsTrend, CoreError> {
        if limit == 0 {
            return Err(CoreError::Invalid("limit must be at least 1".to_string()));
        }

        let logs = self.store.vitals().await;
        Ok(VitalsTrend::from_logs(&logs, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        nutrition::entities::VitalReading,
        test_support::{ScriptedLLMClient, test_service},
    };

    fn pressure(systolic: u16, diastolic: u16) -> RecordVitalInput {
        RecordVitalInput {
            reading: VitalReading::BloodPressure {
                systolic,
                diastolic,
            },
            notes: None,
        }
    }

    #[tokio::test]
    async fn readings_accumulate_and_trend_keeps_the_latest_of_each_kind() {
        let service = test_service(ScriptedLLMClient::replying([])).await;

        service.record_vital(pressure(128, 84)).await.unwrap();
        service
            .record_vital(RecordVitalInput {
                reading: VitalReading::BloodGlucose { value: 98.0 },
                notes: Some("  fasting ".to_string()),
            })
            .await
            .unwrap();
        service.record_vital(pressure(118, 76)).await.unwrap();

        let vitals = service.get_vitals().await.unwrap();
        assert_eq!(vitals.len(), 3);
        assert_eq!(vitals[1].notes.as_deref(), Some("fasting"));

        let trend = service.vitals_trend(2).await.unwrap();
        assert_eq!(trend.total, 3);
        assert_eq!(trend.readings.len(), 2);
        assert_eq!(
            trend.latest_blood_pressure.map(|latest| latest.reading),
            Some(VitalReading::BloodPressure {
                systolic: 118,
                diastolic: 76
            })
        );
        assert_eq!(
            trend.latest_blood_glucose.map(|latest| latest.reading),
            Some(VitalReading::BloodGlucose { value: 98.0 })
        );
    }

    #[tokio::test]
    async fn implausible_reading_is_not_recorded() {
        let service = test_service(ScriptedLLMClient::replying([])).await;

        let result = service.record_vital(pressure(80, 120)).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert!(service.get_vitals().await.unwrap().is_empty());
        assert!(service.vitals_trend(0).await.is_err());
    }
}
