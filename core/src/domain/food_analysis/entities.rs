use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    nutrition::entities::{FoodCategory, FoodItem, JuiceRecipe, MacroNutrients},
};

/// Food recognised by the model, with its nutrition estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedFood {
    pub name: String,
    #[serde(flatten)]
    pub macros: MacroNutrients,
}

impl AnalyzedFood {
    pub fn into_food_item(self, category: FoodCategory, image: Option<String>) -> FoodItem {
        FoodItem::new(self.name, category, self.macros, image)
    }
}

/// Recipe as returned by the model, before it is given an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub benefits: Vec<String>,
    pub macros: MacroNutrients,
}

impl GeneratedRecipe {
    pub fn into_recipe(self) -> JuiceRecipe {
        self.into_recipe_with_id(generate_uuid_v7())
    }

    pub fn into_recipe_with_id(self, id: Uuid) -> JuiceRecipe {
        JuiceRecipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            benefits: self.benefits,
            macros: self.macros,
        }
    }
}
