use serde_json::json;

fn macro_properties() -> serde_json::Value {
    json!({
        "calories": { "type": "number", "description": "Energy in kcal" },
        "protein": { "type": "number", "description": "Protein in grams" },
        "carbs": { "type": "number", "description": "Carbohydrates in grams" },
        "fat": { "type": "number", "description": "Fat in grams" },
        "sugar": { "type": "number", "description": "Sugar in grams" },
        "sodium": { "type": "number", "description": "Sodium in milligrams" }
    })
}

const MACRO_FIELDS: [&str; 6] = ["calories", "protein", "carbs", "fat", "sugar", "sodium"];

/// Returns the JSON schema for image and text food analysis responses
pub fn get_food_analysis_schema() -> serde_json::Value {
    let mut properties = macro_properties();
    properties["name"] = json!({
        "type": "string",
        "description": "Product or dish name"
    });

    let mut required = vec!["name"];
    required.extend(MACRO_FIELDS);

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

/// Returns the JSON schema for juice recipe generation responses
pub fn get_juice_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "benefits": {
                "type": "array",
                "items": { "type": "string" }
            },
            "macros": {
                "type": "object",
                "properties": macro_properties(),
                "required": MACRO_FIELDS
            }
        },
        "required": [
            "name", "description", "ingredients", "instructions", "benefits", "macros"
        ]
    })
}
