use axum::extract::State;
use chrono::Utc;
use nutrilens_core::domain::{
    food_log::FoodLogService,
    navigation::NavigationService,
    nutrition::value_objects::{DailySummary, VitalsTrend},
    recipes::RecipeService,
    store::entities::View,
    vitals::{VitalsService, value_objects::DEFAULT_TREND_LIMIT},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Dashboard {
    pub today: DailySummary,
    pub vitals: VitalsTrend,
    pub saved_recipes: usize,
    pub current_view: View,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardResponse {
    pub data: Dashboard,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Dashboard overview",
    description = "Today's food log totals, the recent vitals trend and the number of saved recipes.",
    responses(
        (status = 200, body = DashboardResponse)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Response<DashboardResponse>, ApiError> {
    let service = &state.service;

    let today = service.daily_summary(Utc::now().date_naive()).await?;
    let vitals = service.vitals_trend(DEFAULT_TREND_LIMIT).await?;
    let saved_recipes = service.get_recipes().await?.len();
    let current_view = service.current_view().await?;

    Ok(Response::OK(DashboardResponse {
        data: Dashboard {
            today,
            vitals,
            saved_recipes,
            current_view,
        },
    }))
}
