//! Turns raw model text into typed records.
//!
//! Model output is untrusted: schema-constrained generation usually returns a
//! bare JSON object, but it may also arrive inside Markdown code fences or
//! surrounded by prose. Parsing runs in two stages. [`extract_json_object`]
//! recovers the outermost `{...}` span, then the typed parsers deserialize it
//! with every field required and check the values. Any failure is a
//! [`ResponseParseError`]; a partially populated record is never returned.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::{
    food_analysis::entities::{AnalyzedFood, GeneratedRecipe},
    nutrition::entities::MacroNutrients,
};

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```[\w-]*[ \t\r]*$").expect("code fence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseParseError {
    #[error("response body is empty")]
    EmptyResponse,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("response does not match the expected schema: {0}")]
    SchemaMismatch(String),

    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize)]
struct FoodAnalysisPayload {
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    sugar: f64,
    sodium: f64,
}

#[derive(Debug, Deserialize)]
struct JuiceRecipePayload {
    name: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    benefits: Vec<String>,
    macros: MacroNutrients,
}

/// Returns the outermost `{...}` span of `raw` with code fences removed.
pub fn extract_json_object(raw: &str) -> Result<String, ResponseParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResponseParseError::EmptyResponse);
    }

    let unfenced = CODE_FENCE.replace_all(trimmed, "");

    let start = unfenced.find('{').ok_or(ResponseParseError::NoJsonObject)?;
    let end = unfenced.rfind('}').ok_or(ResponseParseError::NoJsonObject)?;
    if end < start {
        return Err(ResponseParseError::NoJsonObject);
    }

    Ok(unfenced[start..=end].to_string())
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ResponseParseError> {
    let json = extract_json_object(raw)?;
    serde_json::from_str(&json).map_err(|e| ResponseParseError::SchemaMismatch(e.to_string()))
}

fn check_name(name: String) -> Result<String, ResponseParseError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ResponseParseError::InvalidField {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(name)
}

fn check_macros(macros: MacroNutrients) -> Result<MacroNutrients, ResponseParseError> {
    match macros.first_invalid_field() {
        Some((field, value)) => Err(ResponseParseError::InvalidField {
            field,
            reason: format!("expected a non-negative number, got {value}"),
        }),
        None => Ok(macros),
    }
}

fn check_list(field: &'static str, list: Vec<String>) -> Result<Vec<String>, ResponseParseError> {
    let list: Vec<String> = list
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect();

    if list.is_empty() {
        return Err(ResponseParseError::InvalidField {
            field,
            reason: "must contain at least one entry".to_string(),
        });
    }
    Ok(list)
}

pub fn parse_analyzed_food(raw: &str) -> Result<AnalyzedFood, ResponseParseError> {
    let payload: FoodAnalysisPayload = decode(raw)?;

    let macros = check_macros(MacroNutrients {
        calories: payload.calories,
        protein: payload.protein,
        carbs: payload.carbs,
        fat: payload.fat,
        sugar: payload.sugar,
        sodium: payload.sodium,
    })?;

    Ok(AnalyzedFood {
        name: check_name(payload.name)?,
        macros,
    })
}

pub fn parse_generated_recipe(raw: &str) -> Result<GeneratedRecipe, ResponseParseError> {
    let payload: JuiceRecipePayload = decode(raw)?;

    Ok(GeneratedRecipe {
        name: check_name(payload.name)?,
        description: payload.description.trim().to_string(),
        ingredients: check_list("ingredients", payload.ingredients)?,
        instructions: check_list("instructions", payload.instructions)?,
        benefits: check_list("benefits", payload.benefits)?,
        macros: check_macros(payload.macros)?,
    })
}
