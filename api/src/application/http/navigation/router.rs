use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_view::{__path_get_view, get_view},
    set_view::{__path_set_view, set_view},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_view, set_view))]
pub struct NavigationApiDoc;

pub fn navigation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/view", state.args.server.root_path),
        get(get_view).put(set_view),
    )
}
