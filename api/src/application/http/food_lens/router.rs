use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    log_food_image::{__path_log_food_image, MAX_IMAGE_SIZE, log_food_image},
    log_food_text::{__path_log_food_text, log_food_text},
    scan_food::{__path_scan_food, scan_food},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(log_food_text, log_food_image, scan_food))]
pub struct FoodLensApiDoc;

pub fn food_lens_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/food-lens/text", root_path),
            post(log_food_text),
        )
        .route(
            &format!("{}/food-lens/image", root_path),
            post(log_food_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .route(&format!("{}/food-lens/scan", root_path), post(scan_food))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method},
    };

    use crate::application::http::test::{test_server, test_server_with_model};

    const EGGS: &str = r#"{"name":"Eggs and Avocado Toast","calories":350,"protein":15,"carbs":30,"fat":20,"sugar":2,"sodium":400}"#;

    #[tokio::test]
    async fn text_logging_without_a_credential_logs_nothing() {
        let server = test_server().await;

        let response = server
            .post("/food-lens/text")
            .json(&json!({ "description": "2 eggs and avocado toast" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["code"], "E_MISSING_CREDENTIAL");

        let logs: Value = server.get("/food-logs").await.json();
        assert!(logs["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_description_is_rejected() {
        let server = test_server().await;

        server
            .post("/food-lens/text")
            .json(&json!({ "description": "a".repeat(2001) }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scan_without_a_camera_is_retryable() {
        let server = test_server().await;

        let response = server.post("/food-lens/scan").json(&json!({})).await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["retryable"], true);
    }

    #[tokio::test]
    async fn analyzed_description_is_logged_and_opens_the_summary() {
        let model = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": EGGS }] } }]
            })))
            .expect(1)
            .mount(&model)
            .await;
        let server = test_server_with_model(model.uri(), "test-key").await;

        let response = server
            .post("/food-lens/text")
            .json(&json!({ "description": "2 eggs and avocado toast" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["data"]["name"], "Eggs and Avocado Toast");

        let view: Value = server.get("/view").await.json();
        assert_eq!(view["data"], "summary");

        let logs: Value = server.get("/food-logs").await.json();
        assert_eq!(logs["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_model_is_a_bad_gateway_without_the_key() {
        let server = test_server_with_model("http://127.0.0.1:1".to_string(), "SECRETKEY123").await;

        let response = server
            .post("/food-lens/text")
            .json(&json!({ "description": "2 eggs and avocado toast" }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(!response.text().contains("SECRETKEY123"));
        assert_eq!(response.json::<Value>()["retryable"], true);
    }
}
