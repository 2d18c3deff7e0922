use std::future::Future;

use futures::future::BoxFuture;

use crate::domain::{common::entities::app_errors::CoreError, store::entities::StateChange};

/// String key-value storage holding one JSON document per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Reacts to committed store mutations.
pub trait StoreSubscriber: Send + Sync {
    fn on_change<'a>(&'a self, change: &'a StateChange) -> BoxFuture<'a, ()>;
}
