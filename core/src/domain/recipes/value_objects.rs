#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub preferences: String,
    pub health_conditions: String,
}
