use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    capture::ports::CameraDevice,
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::{FoodAnalysisService, LLMClient},
    nutrition::entities::JuiceRecipe,
    recipes::{ports::RecipeService, value_objects::GenerateRecipeInput},
};

fn validate_recipe(recipe: &JuiceRecipe) -> Result<(), CoreError> {
    if recipe.name.trim().is_empty() {
        return Err(CoreError::Invalid("recipe name must not be empty".to_string()));
    }
    if recipe.ingredients.is_empty() || recipe.instructions.is_empty() {
        return Err(CoreError::Invalid(
            "recipe needs ingredients and instructions".to_string(),
        ));
    }
    if let Some((field, value)) = recipe.macros.first_invalid_field() {
        return Err(CoreError::Invalid(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }

    Ok(())
}

impl<LLM, CAM> RecipeService for Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    #[instrument(skip(self, input))]
    async fn suggest_recipe(&self, input: GenerateRecipeInput) -> Result<JuiceRecipe, CoreError> {
        let _busy = self.juice_bar_busy.try_acquire()?;

        self.generate_recipe(input.preferences, input.health_conditions)
            .await
    }

    #[instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    async fn save_recipe(&self, recipe: JuiceRecipe) -> Result<JuiceRecipe, CoreError> {
        validate_recipe(&recipe)?;
        self.store.append_recipe(recipe).await
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<JuiceRecipe, CoreError> {
        self.store.remove_recipe(recipe_id).await
    }

    async fn get_recipes(&self) -> Result<Vec<JuiceRecipe>, CoreError> {
        Ok(self.store.recipes().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{ScriptedLLMClient, test_service};

    const HIBISCUS: &str = r#"{
        "name": "Hibiscus Hypertension Cooler",
        "description": "A tart, caffeine-free cooler.",
        "ingredients": ["2 tbsp dried hibiscus", "1 cup water", "1/2 lime"],
        "instructions": ["Steep the hibiscus", "Chill", "Squeeze in the lime"],
        "benefits": ["May support healthy blood pressure"],
        "macros": {"calories": 40, "protein": 0.5, "carbs": 10, "fat": 0, "sugar": 6, "sodium": 5}
    }"#;

    fn input() -> GenerateRecipeInput {
        GenerateRecipeInput {
            preferences: "tart, no added sugar".to_string(),
            health_conditions: "hypertension".to_string(),
        }
    }

    #[tokio::test]
    async fn generated_recipe_is_transient_until_saved_and_delete_restores_state() {
        let llm = ScriptedLLMClient::replying([Ok(HIBISCUS.to_string())]);
        let service = test_service(llm.clone()).await;

        let recipe = service.suggest_recipe(input()).await.unwrap();
        assert_eq!(recipe.name, "Hibiscus Hypertension Cooler");
        assert!(service.get_recipes().await.unwrap().is_empty());

        let prompt = &llm.calls()[0].prompt;
        assert!(prompt.contains("tart, no added sugar"));
        assert!(prompt.contains("hypertension"));

        let before = service.get_recipes().await.unwrap();
        service.save_recipe(recipe.clone()).await.unwrap();

        let saved = service.get_recipes().await.unwrap();
        assert_eq!(saved.len(), before.len() + 1);
        assert_eq!(saved.last(), Some(&recipe));

        let removed = service.delete_recipe(recipe.id).await.unwrap();
        assert_eq!(removed.id, recipe.id);
        assert_eq!(service.get_recipes().await.unwrap(), before);
    }

    #[tokio::test]
    async fn saving_twice_conflicts_and_deleting_unknown_is_not_found() {
        let service =
            test_service(ScriptedLLMClient::replying([Ok(HIBISCUS.to_string())])).await;
        let recipe = service.suggest_recipe(input()).await.unwrap();

        service.save_recipe(recipe.clone()).await.unwrap();
        assert!(matches!(
            service.save_recipe(recipe).await,
            Err(CoreError::Conflict(_))
        ));
        assert_eq!(service.get_recipes().await.unwrap().len(), 1);

        assert_eq!(
            service.delete_recipe(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn generation_failure_is_retryable_and_saves_nothing() {
        let service = test_service(ScriptedLLMClient::replying([Err(
            CoreError::ExternalServiceError("connection reset".to_string()),
        )]))
        .await;

        let result = service.suggest_recipe(input()).await;

        assert!(matches!(result, Err(CoreError::RecipeGenerationFailed(_))));
        assert!(!service.juice_bar_busy.is_busy());
        assert!(service.get_recipes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn hand_edited_recipe_without_steps_is_rejected() {
        let service =
            test_service(ScriptedLLMClient::replying([Ok(HIBISCUS.to_string())])).await;
        let mut recipe = service.suggest_recipe(input()).await.unwrap();
        recipe.instructions.clear();

        assert!(matches!(
            service.save_recipe(recipe).await,
            Err(CoreError::Invalid(_))
        ));
    }
}
