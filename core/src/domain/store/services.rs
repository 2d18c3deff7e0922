use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{FoodItem, JuiceRecipe, VitalLog},
    store::{
        entities::{AppSnapshot, StateChange, View},
        ports::StoreSubscriber,
    },
};

/// Single owner of the application state.
///
/// Collections are never edited in place: every mutation builds a new
/// collection, swaps it in and then notifies subscribers in registration
/// order. Notification happens under the write lock so subscribers observe
/// changes in commit order.
pub struct AppStore {
    state: RwLock<AppSnapshot>,
    subscribers: Vec<Arc<dyn StoreSubscriber>>,
}

impl AppStore {
    pub fn new(initial: AppSnapshot) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: Vec::new(),
        }
    }

    pub fn with_subscriber(mut self, subscriber: Arc<dyn StoreSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        self.state.read().await.clone()
    }

    pub async fn food_logs(&self) -> Vec<FoodItem> {
        self.state.read().await.food_logs.clone()
    }

    pub async fn recipes(&self) -> Vec<JuiceRecipe> {
        self.state.read().await.recipes.clone()
    }

    pub async fn vitals(&self) -> Vec<VitalLog> {
        self.state.read().await.vitals.clone()
    }

    pub async fn current_view(&self) -> View {
        self.state.read().await.current_view
    }

    pub async fn set_view(&self, view: View) -> View {
        let mut state = self.state.write().await;
        if state.current_view != view {
            debug!(from = ?state.current_view, to = ?view, "View changed");
        }
        state.current_view = view;
        view
    }

    pub async fn append_food_item(&self, item: FoodItem) -> FoodItem {
        let mut state = self.state.write().await;

        let mut food_logs = state.food_logs.clone();
        food_logs.push(item.clone());
        state.food_logs = food_logs.clone();

        info!(item_id = %item.id, name = %item.name, total = food_logs.len(), "Food item logged");
        self.publish(StateChange::FoodLogs(food_logs)).await;

        item
    }

    pub async fn append_vital(&self, log: VitalLog) -> VitalLog {
        let mut state = self.state.write().await;

        let mut vitals = state.vitals.clone();
        vitals.push(log.clone());
        state.vitals = vitals.clone();

        info!(vital_id = %log.id, total = vitals.len(), "Vital reading recorded");
        self.publish(StateChange::Vitals(vitals)).await;

        log
    }

    pub async fn append_recipe(&self, recipe: JuiceRecipe) -> Result<JuiceRecipe, CoreError> {
        let mut state = self.state.write().await;

        if state.recipes.iter().any(|saved| saved.id == recipe.id) {
            return Err(CoreError::Conflict(format!(
                "recipe {} is already saved",
                recipe.id
            )));
        }

        let mut recipes = state.recipes.clone();
        recipes.push(recipe.clone());
        state.recipes = recipes.clone();

        info!(recipe_id = %recipe.id, name = %recipe.name, total = recipes.len(), "Recipe saved");
        self.publish(StateChange::Recipes(recipes)).await;

        Ok(recipe)
    }

    /// Removes exactly the recipe with `id`, keeping the others in order.
    pub async fn remove_recipe(&self, id: Uuid) -> Result<JuiceRecipe, CoreError> {
        let mut state = self.state.write().await;

        let removed = state
            .recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or(CoreError::NotFound)?;

        let recipes: Vec<JuiceRecipe> = state
            .recipes
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();
        state.recipes = recipes.clone();

        info!(recipe_id = %id, total = recipes.len(), "Recipe deleted");
        self.publish(StateChange::Recipes(recipes)).await;

        Ok(removed)
    }

    async fn publish(&self, change: StateChange) {
        for subscriber in &self.subscribers {
            subscriber.on_change(&change).await;
        }
    }
}
