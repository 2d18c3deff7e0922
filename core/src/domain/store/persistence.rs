use futures::{FutureExt, future::BoxFuture};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    store::{
        entities::{AppSnapshot, CollectionKey, StateChange},
        ports::{KeyValueStore, StoreSubscriber},
    },
};

/// Mirrors each collection to a key-value store as a JSON array.
pub struct PersistenceAdapter<KV> {
    kv: KV,
}

impl<KV: KeyValueStore> PersistenceAdapter<KV> {
    pub fn new(kv: KV) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &KV {
        &self.kv
    }

    /// Reads every collection once. Missing or unreadable values load as empty.
    pub async fn load(&self) -> AppSnapshot {
        AppSnapshot {
            food_logs: self.load_collection(CollectionKey::FoodLogs).await,
            recipes: self.load_collection(CollectionKey::Recipes).await,
            vitals: self.load_collection(CollectionKey::Vitals).await,
            ..Default::default()
        }
    }

    async fn load_collection<T: DeserializeOwned>(&self, key: CollectionKey) -> Vec<T> {
        let raw = match self.kv.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = key.as_str(), "No persisted value, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = key.as_str(), error = %e, "Failed to read persisted collection, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                debug!(key = key.as_str(), count = items.len(), "Loaded persisted collection");
                items
            }
            Err(e) => {
                warn!(key = key.as_str(), error = %e, "Persisted collection is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Rewrites the whole collection named by `change`.
    pub async fn persist(&self, change: &StateChange) -> Result<(), CoreError> {
        let payload = match change {
            StateChange::FoodLogs(items) => serde_json::to_string(items),
            StateChange::Recipes(items) => serde_json::to_string(items),
            StateChange::Vitals(items) => serde_json::to_string(items),
        }
        .map_err(|e| CoreError::StorageError(format!("Failed to serialize collection: {}", e)))?;

        self.kv.set(change.key().as_str(), payload).await
    }
}

impl<KV: KeyValueStore> StoreSubscriber for PersistenceAdapter<KV> {
    fn on_change<'a>(&'a self, change: &'a StateChange) -> BoxFuture<'a, ()> {
        async move {
            if let Err(e) = self.persist(change).await {
                error!(key = change.key().as_str(), error = %e, "Failed to persist collection");
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::nutrition::entities::{
            FoodCategory, FoodItem, JuiceRecipe, MacroNutrients, VitalLog, VitalReading,
        },
        infrastructure::kv::InMemoryKeyValueStore,
    };

    fn sample_food() -> FoodItem {
        FoodItem::new(
            "Oatmeal".into(),
            FoodCategory::Meal,
            MacroNutrients {
                calories: 150.0,
                protein: 5.0,
                carbs: 27.0,
                fat: 3.0,
                sugar: 1.0,
                sodium: 0.0,
            },
            Some("data:image/jpeg;base64,AAAA".into()),
        )
    }

    #[tokio::test]
    async fn collections_round_trip_through_a_fresh_load() {
        let kv = InMemoryKeyValueStore::default();
        let adapter = PersistenceAdapter::new(kv.clone());
        let food = vec![sample_food()];
        let vitals = vec![VitalLog::new(
            VitalReading::BloodPressure {
                systolic: 121,
                diastolic: 79,
            },
            None,
        )];

        adapter
            .persist(&StateChange::FoodLogs(food.clone()))
            .await
            .unwrap();
        adapter
            .persist(&StateChange::Vitals(vitals.clone()))
            .await
            .unwrap();

        let reloaded = PersistenceAdapter::new(kv).load().await;

        assert_eq!(reloaded.food_logs, food);
        assert_eq!(reloaded.vitals, vitals);
        assert!(reloaded.recipes.is_empty());
    }

    #[tokio::test]
    async fn corrupted_value_loads_as_empty() {
        let kv = InMemoryKeyValueStore::default();
        kv.set("foodLogs", "{not json".to_string()).await.unwrap();
        kv.set("recipes", r#"{"an":"object"}"#.to_string())
            .await
            .unwrap();

        let snapshot = PersistenceAdapter::new(kv).load().await;

        assert!(snapshot.food_logs.is_empty());
        assert!(snapshot.recipes.is_empty());
        assert!(snapshot.vitals.is_empty());
    }

    #[tokio::test]
    async fn persisted_values_use_the_collection_keys() {
        let kv = InMemoryKeyValueStore::default();
        let adapter = PersistenceAdapter::new(kv.clone());

        adapter
            .on_change(&StateChange::Recipes(Vec::<JuiceRecipe>::new()))
            .await;

        assert_eq!(kv.get("recipes").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(kv.get("foodLogs").await.unwrap(), None);
    }
}
