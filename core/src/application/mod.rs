use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::{
        common::{NutrilensConfig, services::Service},
        store::{AppStore, PersistenceAdapter, ports::KeyValueStore},
    },
    infrastructure::{
        camera::FileCamera,
        kv::{FileKeyValueStore, InMemoryKeyValueStore},
        llm::GeminiLLMClient,
    },
};

pub type NutrilensService = Service<GeminiLLMClient, FileCamera>;

/// Loads the persisted collections through `kv` and keeps them mirrored there.
pub async fn build_store<KV: KeyValueStore + 'static>(kv: KV) -> AppStore {
    let adapter = PersistenceAdapter::new(kv);
    let snapshot = adapter.load().await;

    info!(
        food_logs = snapshot.food_logs.len(),
        recipes = snapshot.recipes.len(),
        vitals = snapshot.vitals.len(),
        "Application state loaded"
    );

    AppStore::new(snapshot).with_subscriber(Arc::new(adapter))
}

pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, anyhow::Error> {
    let store = match &config.storage.data_dir {
        Some(dir) => build_store(FileKeyValueStore::open(dir).await?).await,
        None => {
            warn!("No data directory configured, state will not survive a restart");
            build_store(InMemoryKeyValueStore::default()).await
        }
    };

    let llm_client = GeminiLLMClient::from(&config.llm);
    if !llm_client.has_credential() {
        warn!("GEMINI_API_KEY is not set, analysis and recipe generation will be refused");
    }

    let camera = FileCamera::new(
        config.camera.rear_source.clone(),
        config.camera.fallback_source.clone(),
    );

    Ok(Service::new(Arc::new(store), llm_client, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{CameraConfig, LLMConfig, StorageConfig},
        nutrition::entities::VitalReading,
        store::CollectionKey,
        vitals::{RecordVitalInput, VitalsService},
    };

    fn config(data_dir: &std::path::Path) -> NutrilensConfig {
        NutrilensConfig {
            llm: LLMConfig::default(),
            storage: StorageConfig {
                data_dir: Some(data_dir.to_path_buf()),
            },
            camera: CameraConfig::default(),
        }
    }

    #[tokio::test]
    async fn state_survives_a_restart_through_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();

        let service = create_service(config(dir.path())).await.unwrap();
        service
            .record_vital(RecordVitalInput {
                reading: VitalReading::BloodGlucose { value: 104.0 },
                notes: None,
            })
            .await
            .unwrap();
        drop(service);

        let restarted = create_service(config(dir.path())).await.unwrap();
        let vitals = restarted.get_vitals().await.unwrap();
        assert_eq!(vitals.len(), 1);
        assert_eq!(vitals[0].reading, VitalReading::BloodGlucose { value: 104.0 });
    }

    #[tokio::test]
    async fn corrupted_collection_loads_empty_without_touching_the_others() {
        let kv = InMemoryKeyValueStore::default();
        kv.set(CollectionKey::FoodLogs.as_str(), "{not json".to_string())
            .await
            .unwrap();
        kv.set(CollectionKey::Recipes.as_str(), "[]".to_string())
            .await
            .unwrap();

        let store = build_store(kv).await;

        assert!(store.food_logs().await.is_empty());
        assert!(store.recipes().await.is_empty());
    }
}
