use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_vitals::{__path_get_vitals, get_vitals},
    record_vital::{__path_record_vital, record_vital},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_vitals, record_vital))]
pub struct VitalsApiDoc;

pub fn vitals_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/vitals", state.args.server.root_path),
        get(get_vitals).post(record_vital),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn recorded_readings_show_up_in_the_trend() {
        let server = test_server().await;

        server
            .post("/vitals")
            .json(&json!({ "reading": { "type": "blood_pressure", "systolic": 122, "diastolic": 81 } }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/vitals")
            .json(&json!({ "reading": { "type": "blood_glucose", "value": 95.5 }, "notes": "after lunch" }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server.get("/vitals").add_query_param("limit", 1).await.json();

        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["readings"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["latest_blood_pressure"]["reading"]["systolic"], 122);
        assert_eq!(body["data"]["latest_blood_glucose"]["reading"]["value"], 95.5);
    }

    #[tokio::test]
    async fn implausible_or_mixed_readings_are_rejected() {
        let server = test_server().await;

        server
            .post("/vitals")
            .json(&json!({ "reading": { "type": "blood_pressure", "systolic": 70, "diastolic": 90 } }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .post("/vitals")
            .json(&json!({ "reading": { "type": "blood_sugar", "value": 90 } }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .post("/vitals")
            .json(&json!({
                "reading": { "type": "blood_pressure", "systolic": 120, "diastolic": 80, "value": 95 }
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let body: Value = server.get("/vitals").await.json();
        assert_eq!(body["data"]["total"], 0);
    }
}
