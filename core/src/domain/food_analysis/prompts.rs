pub fn image_analysis_prompt() -> String {
    "Analyze this image. First, look for a barcode. If a barcode is visible, decode it, \
     identify the exact product it belongs to and report that product's nutrition facts. \
     If there is no readable barcode, identify the food items in the frame and estimate \
     the nutrition for the visible portion. Respond with a single JSON object containing \
     a short `name` and the numeric fields `calories` (kcal), `protein`, `carbs`, `fat`, \
     `sugar` (grams) and `sodium` (milligrams)."
        .to_string()
}

pub fn text_analysis_prompt(description: &str) -> String {
    format!(
        "Estimate the nutrition for the following food: \"{}\". If no quantity is given, \
         assume a standard serving size. Respond with a single JSON object containing a \
         short `name` and the numeric fields `calories` (kcal), `protein`, `carbs`, `fat`, \
         `sugar` (grams) and `sodium` (milligrams).",
        description.trim()
    )
}

pub fn juice_recipe_prompt(preferences: &str, health_conditions: &str) -> String {
    let preferences = non_blank_or(preferences, "no particular taste preferences");
    let health_conditions = non_blank_or(health_conditions, "general wellness");

    format!(
        "Create a healthy juice recipe. Taste preferences: {preferences}. Health conditions \
         to address: {health_conditions}. Respond with a single JSON object containing \
         `name`, `description`, an ordered `ingredients` list with quantities, an ordered \
         `instructions` list, a `benefits` list explaining how the juice helps with the \
         conditions, and a `macros` object with numeric `calories`, `protein`, `carbs`, \
         `fat`, `sugar` and `sodium` for one serving."
    )
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prompt_embeds_description_and_serving_rule() {
        let prompt = text_analysis_prompt("  2 eggs and avocado toast ");

        assert!(prompt.contains("\"2 eggs and avocado toast\""));
        assert!(prompt.contains("standard serving size"));
    }

    #[test]
    fn recipe_prompt_fills_blank_inputs() {
        let prompt = juice_recipe_prompt("", "hypertension");

        assert!(prompt.contains("no particular taste preferences"));
        assert!(prompt.contains("hypertension"));
    }

    #[test]
    fn image_prompt_prefers_barcodes() {
        assert!(image_analysis_prompt().contains("barcode"));
    }
}
