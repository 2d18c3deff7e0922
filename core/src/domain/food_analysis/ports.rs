use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::AnalyzedFood,
    nutrition::entities::JuiceRecipe,
};

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Gateway between the application and the generative model.
///
/// Every operation either returns a fully validated record or fails. A
/// missing credential is reported as [`CoreError::MissingCredential`];
/// everything else (transport, endpoint, unparseable output) collapses into
/// [`CoreError::AnalysisFailed`] or [`CoreError::RecipeGenerationFailed`].
pub trait FoodAnalysisService: Send + Sync {
    /// `image_data` is a JPEG-encoded still frame.
    fn analyze_image(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<AnalyzedFood, CoreError>> + Send;

    fn analyze_text(
        &self,
        description: String,
    ) -> impl Future<Output = Result<AnalyzedFood, CoreError>> + Send;

    fn generate_recipe(
        &self,
        preferences: String,
        health_conditions: String,
    ) -> impl Future<Output = Result<JuiceRecipe, CoreError>> + Send;
}
