use std::{iter::Sum, ops::Add};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

pub const SYSTOLIC_RANGE: (u16, u16) = (50, 260);
pub const DIASTOLIC_RANGE: (u16, u16) = (30, 180);
/// mg/dL
pub const GLUCOSE_RANGE: (f64, f64) = (10.0, 800.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl MacroNutrients {
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ]
    }

    /// First field that is not a finite, non-negative number.
    pub fn first_invalid_field(&self) -> Option<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }
}

impl Add for MacroNutrients {
    type Output = MacroNutrients;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            sugar: self.sugar + rhs.sugar,
            sodium: self.sodium + rhs.sodium,
        }
    }
}

impl Sum for MacroNutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroNutrients::default(), Add::add)
    }
}

impl<'a> Sum<&'a MacroNutrients> for MacroNutrients {
    fn sum<I: Iterator<Item = &'a MacroNutrients>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[default]
    Meal,
    Snack,
    Juice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub category: FoodCategory,
    /// Low-resolution JPEG thumbnail as a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub macros: MacroNutrients,
}

impl FoodItem {
    pub fn new(
        name: String,
        category: FoodCategory,
        macros: MacroNutrients,
        image: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            timestamp: now,
            category,
            image,
            macros,
        }
    }
}

/// A single measurement. Blood pressure and glucose never share a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum VitalReading {
    BloodPressure { systolic: u16, diastolic: u16 },
    BloodGlucose { value: f64 },
}

impl VitalReading {
    pub fn validate(&self) -> Result<(), CoreError> {
        match *self {
            VitalReading::BloodPressure {
                systolic,
                diastolic,
            } => {
                if !(SYSTOLIC_RANGE.0..=SYSTOLIC_RANGE.1).contains(&systolic) {
                    return Err(CoreError::Invalid(format!(
                        "systolic must be between {} and {} mmHg",
                        SYSTOLIC_RANGE.0, SYSTOLIC_RANGE.1
                    )));
                }
                if !(DIASTOLIC_RANGE.0..=DIASTOLIC_RANGE.1).contains(&diastolic) {
                    return Err(CoreError::Invalid(format!(
                        "diastolic must be between {} and {} mmHg",
                        DIASTOLIC_RANGE.0, DIASTOLIC_RANGE.1
                    )));
                }
                if systolic <= diastolic {
                    return Err(CoreError::Invalid(
                        "systolic must be greater than diastolic".to_string(),
                    ));
                }
                Ok(())
            }
            VitalReading::BloodGlucose { value } => {
                if !value.is_finite() || value < GLUCOSE_RANGE.0 || value > GLUCOSE_RANGE.1 {
                    return Err(CoreError::Invalid(format!(
                        "blood glucose must be between {} and {} mg/dL",
                        GLUCOSE_RANGE.0, GLUCOSE_RANGE.1
                    )));
                }
                Ok(())
            }
        }
    }

    pub fn is_blood_pressure(&self) -> bool {
        matches!(self, VitalReading::BloodPressure { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VitalLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub reading: VitalReading,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VitalLog {
    pub fn new(reading: VitalReading, notes: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            timestamp: now,
            reading,
            notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JuiceRecipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub benefits: Vec<String>,
    pub macros: MacroNutrients,
}
