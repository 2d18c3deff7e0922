use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_recipe::{__path_delete_recipe, delete_recipe},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, get_recipes, save_recipe, delete_recipe))]
pub struct JuiceBarApiDoc;

pub fn juice_bar_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/juice-bar/recipes/generate", root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/juice-bar/recipes", root_path),
            get(get_recipes).post(save_recipe),
        )
        .route(
            &format!("{}/juice-bar/recipes/{{recipe_id}}", root_path),
            delete(delete_recipe),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::application::http::test::test_server;

    fn recipe(name: &str) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "name": name,
            "description": "Tart and cold",
            "ingredients": ["hibiscus", "water", "lime"],
            "instructions": ["steep", "chill"],
            "benefits": ["blood pressure support"],
            "macros": { "calories": 40, "protein": 0, "carbs": 10, "fat": 0, "sugar": 6, "sodium": 5 }
        })
    }

    #[tokio::test]
    async fn save_then_delete_restores_the_collection() {
        let server = test_server().await;
        let first = recipe("Green Morning");
        let cooler = recipe("Hibiscus Hypertension Cooler");
        let last = recipe("Beet Boost");

        for body in [&first, &cooler, &last] {
            server
                .post("/juice-bar/recipes")
                .json(body)
                .await
                .assert_status(StatusCode::CREATED);
        }

        server
            .delete(&format!("/juice-bar/recipes/{}", cooler["id"].as_str().unwrap()))
            .await
            .assert_status_ok();

        let body: Value = server.get("/juice-bar/recipes").await.json();
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Green Morning", "Beet Boost"]);
    }

    #[tokio::test]
    async fn duplicate_save_conflicts_and_unknown_delete_is_not_found() {
        let server = test_server().await;
        let body = recipe("Hibiscus Hypertension Cooler");

        server.post("/juice-bar/recipes").json(&body).await;
        server
            .post("/juice-bar/recipes")
            .json(&body)
            .await
            .assert_status(StatusCode::CONFLICT);

        server
            .delete(&format!("/juice-bar/recipes/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generation_without_a_credential_is_a_blocking_error() {
        let server = test_server().await;

        let response = server
            .post("/juice-bar/recipes/generate")
            .json(&json!({ "preferences": "sweet", "health_conditions": "anemia" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["blocking"], true);
        assert_eq!(body["retryable"], false);
    }

    #[tokio::test]
    async fn empty_preferences_fail_validation() {
        let server = test_server().await;

        server
            .post("/juice-bar/recipes/generate")
            .json(&json!({ "preferences": "", "health_conditions": "anemia" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
