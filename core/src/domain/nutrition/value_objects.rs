use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{FoodCategory, FoodItem, MacroNutrients, VitalLog, VitalReading},
};

/// Manual food entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewFoodItem {
    pub name: String,
    #[serde(default)]
    pub category: FoodCategory,
    #[serde(flatten)]
    pub macros: MacroNutrients,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewFoodItem {
    pub fn into_food_item(self) -> Result<FoodItem, CoreError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("name must not be empty".to_string()));
        }
        if let Some((field, value)) = self.macros.first_invalid_field() {
            return Err(CoreError::Invalid(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }

        Ok(FoodItem::new(name, self.category, self.macros, self.image))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub items: Vec<FoodItem>,
    pub totals: MacroNutrients,
    pub item_count: usize,
}

impl DailySummary {
    /// Items logged on `date` (UTC), in the order they were logged.
    pub fn for_date(date: NaiveDate, logs: &[FoodItem]) -> Self {
        let items: Vec<FoodItem> = logs
            .iter()
            .filter(|item| item.timestamp.date_naive() == date)
            .cloned()
            .collect();
        let totals = items.iter().map(|item| &item.macros).sum();

        Self {
            date,
            item_count: items.len(),
            items,
            totals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatestReading {
    pub timestamp: DateTime<Utc>,
    pub reading: VitalReading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VitalsTrend {
    /// Oldest first.
    pub readings: Vec<VitalLog>,
    pub latest_blood_pressure: Option<LatestReading>,
    pub latest_blood_glucose: Option<LatestReading>,
    pub total: usize,
}

impl VitalsTrend {
    pub fn from_logs(logs: &[VitalLog], limit: usize) -> Self {
        let mut sorted: Vec<VitalLog> = logs.to_vec();
        sorted.sort_by_key(|log| log.timestamp);

        let latest = |want_pressure: bool| {
            sorted
                .iter()
                .rev()
                .find(|log| log.reading.is_blood_pressure() == want_pressure)
                .map(|log| LatestReading {
                    timestamp: log.timestamp,
                    reading: log.reading,
                })
        };
        let latest_blood_pressure = latest(true);
        let latest_blood_glucose = latest(false);

        let total = sorted.len();
        let readings = sorted.split_off(total.saturating_sub(limit));

        Self {
            readings,
            latest_blood_pressure,
            latest_blood_glucose,
            total,
        }
    }
}
