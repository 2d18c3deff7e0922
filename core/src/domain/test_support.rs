use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::{
    application::build_store,
    domain::{
        common::{entities::app_errors::CoreError, services::Service},
        food_analysis::ports::LLMClient,
    },
    infrastructure::{camera::FileCamera, kv::InMemoryKeyValueStore},
};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub with_image: bool,
}

/// Replays canned model replies in order and records every prompt it sees.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLLMClient {
    replies: Arc<Mutex<VecDeque<Result<String, CoreError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedLLMClient {
    pub fn replying(replies: impl IntoIterator<Item = Result<String, CoreError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self, prompt: String, with_image: bool) -> Result<String, CoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { prompt, with_image });

        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(CoreError::ExternalServiceError(
                "no scripted reply left".to_string(),
            ))
        })
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        _image_data: Vec<u8>,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.next_reply(prompt, true)
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.next_reply(prompt, false)
    }
}

pub type TestService = Service<ScriptedLLMClient, FileCamera>;

/// In-memory service with no capture device.
pub async fn test_service(llm: ScriptedLLMClient) -> TestService {
    test_service_with_camera(llm, FileCamera::default()).await
}

pub async fn test_service_with_camera(llm: ScriptedLLMClient, camera: FileCamera) -> TestService {
    let store = build_store(InMemoryKeyValueStore::default()).await;
    Service::new(Arc::new(store), llm, camera)
}
