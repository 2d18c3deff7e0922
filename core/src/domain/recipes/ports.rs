use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::JuiceRecipe,
    recipes::value_objects::GenerateRecipeInput,
};

pub trait RecipeService: Send + Sync {
    /// Returns a recipe that is not saved until [`RecipeService::save_recipe`].
    fn suggest_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<JuiceRecipe, CoreError>> + Send;

    fn save_recipe(
        &self,
        recipe: JuiceRecipe,
    ) -> impl Future<Output = Result<JuiceRecipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<JuiceRecipe, CoreError>> + Send;

    fn get_recipes(&self) -> impl Future<Output = Result<Vec<JuiceRecipe>, CoreError>> + Send;
}
