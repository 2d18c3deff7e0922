use utoipa::OpenApi;

use crate::application::http::{
    dashboard::router::DashboardApiDoc, food_lens::router::FoodLensApiDoc,
    food_log::router::FoodLogApiDoc, health::__path_health, juice_bar::router::JuiceBarApiDoc,
    navigation::router::NavigationApiDoc, vitals::router::VitalsApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    paths(health),
    nest(
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/food-logs", api = FoodLogApiDoc),
        (path = "/food-lens", api = FoodLensApiDoc),
        (path = "/juice-bar", api = JuiceBarApiDoc),
        (path = "/vitals", api = VitalsApiDoc),
        (path = "/view", api = NavigationApiDoc),
    )
)]
pub struct ApiDoc;
