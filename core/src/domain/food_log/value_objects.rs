use crate::domain::nutrition::entities::FoodCategory;

#[derive(Debug, Clone)]
pub struct LogFoodFromTextInput {
    pub description: String,
    pub category: FoodCategory,
}

#[derive(Debug, Clone)]
pub struct LogFoodFromImageInput {
    /// Raw upload, JPEG or PNG.
    pub image_data: Vec<u8>,
    pub category: FoodCategory,
}
