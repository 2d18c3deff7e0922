use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::entities::{FoodItem, JuiceRecipe, VitalLog};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    FoodLens,
    JuiceBar,
    Vitals,
    Summary,
}

/// The persisted collections, keyed as they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    FoodLogs,
    Recipes,
    Vitals,
}

impl CollectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::FoodLogs => "foodLogs",
            CollectionKey::Recipes => "recipes",
            CollectionKey::Vitals => "vitals",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub food_logs: Vec<FoodItem>,
    pub recipes: Vec<JuiceRecipe>,
    pub vitals: Vec<VitalLog>,
    pub current_view: View,
}

/// Emitted after a collection has been replaced; carries the new collection.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    FoodLogs(Vec<FoodItem>),
    Recipes(Vec<JuiceRecipe>),
    Vitals(Vec<VitalLog>),
}

impl StateChange {
    pub fn key(&self) -> CollectionKey {
        match self {
            StateChange::FoodLogs(_) => CollectionKey::FoodLogs,
            StateChange::Recipes(_) => CollectionKey::Recipes,
            StateChange::Vitals(_) => CollectionKey::Vitals,
        }
    }
}
