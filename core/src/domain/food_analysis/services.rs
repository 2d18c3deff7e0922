use tracing::{error, info, instrument};

use crate::domain::{
    capture::ports::CameraDevice,
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::AnalyzedFood,
        parser::{parse_analyzed_food, parse_generated_recipe},
        ports::{FoodAnalysisService, LLMClient},
        prompts::{image_analysis_prompt, juice_recipe_prompt, text_analysis_prompt},
        schema::{get_food_analysis_schema, get_juice_recipe_schema},
    },
    nutrition::entities::JuiceRecipe,
};

fn analysis_failure(err: CoreError) -> CoreError {
    match err {
        CoreError::MissingCredential => CoreError::MissingCredential,
        CoreError::AnalysisFailed(reason) => CoreError::AnalysisFailed(reason),
        other => CoreError::AnalysisFailed(other.to_string()),
    }
}

fn recipe_failure(err: CoreError) -> CoreError {
    match err {
        CoreError::MissingCredential => CoreError::MissingCredential,
        CoreError::RecipeGenerationFailed(reason) => CoreError::RecipeGenerationFailed(reason),
        other => CoreError::RecipeGenerationFailed(other.to_string()),
    }
}

impl<LLM, CAM> Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    fn parse_food_response(&self, raw_response: &str) -> Result<AnalyzedFood, CoreError> {
        parse_analyzed_food(raw_response).map_err(|e| {
            error!(error = %e, "Failed to parse food analysis response");
            CoreError::AnalysisFailed(e.to_string())
        })
    }
}

impl<LLM, CAM> FoodAnalysisService for Service<LLM, CAM>
where
    LLM: LLMClient,
    CAM: CameraDevice,
{
    #[instrument(skip(self, image_data), fields(image_bytes = image_data.len()))]
    async fn analyze_image(&self, image_data: Vec<u8>) -> Result<AnalyzedFood, CoreError> {
        if image_data.is_empty() {
            return Err(CoreError::Invalid("image must not be empty".to_string()));
        }

        let raw_response = self
            .llm_client
            .generate_with_image(image_analysis_prompt(), image_data, get_food_analysis_schema())
            .await
            .map_err(|e| {
                error!(error = %e, "Image analysis request failed");
                analysis_failure(e)
            })?;

        let food = self.parse_food_response(&raw_response)?;
        info!(name = %food.name, calories = food.macros.calories, "Image analyzed");

        Ok(food)
    }

    #[instrument(skip(self))]
    async fn analyze_text(&self, description: String) -> Result<AnalyzedFood, CoreError> {
        if description.trim().is_empty() {
            return Err(CoreError::Invalid(
                "description must not be empty".to_string(),
            ));
        }

        let raw_response = self
            .llm_client
            .generate_with_text(text_analysis_prompt(&description), get_food_analysis_schema())
            .await
            .map_err(|e| {
                error!(error = %e, "Text analysis request failed");
                analysis_failure(e)
            })?;

        let food = self.parse_food_response(&raw_response)?;
        info!(name = %food.name, calories = food.macros.calories, "Description analyzed");

        Ok(food)
    }

    #[instrument(skip(self))]
    async fn generate_recipe(
        &self,
        preferences: String,
        health_conditions: String,
    ) -> Result<JuiceRecipe, CoreError> {
        if preferences.trim().is_empty() && health_conditions.trim().is_empty() {
            return Err(CoreError::Invalid(
                "preferences or health conditions must be provided".to_string(),
            ));
        }

        let raw_response = self
            .llm_client
            .generate_with_text(
                juice_recipe_prompt(&preferences, &health_conditions),
                get_juice_recipe_schema(),
            )
            .await
            .map_err(|e| {
                error!(error = %e, "Recipe generation request failed");
                recipe_failure(e)
            })?;

        let recipe = parse_generated_recipe(&raw_response).map_err(|e| {
            error!(error = %e, "Failed to parse recipe response");
            CoreError::RecipeGenerationFailed(e.to_string())
        })?;

        let recipe = recipe.into_recipe();
        info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe generated");

        Ok(recipe)
    }
}
