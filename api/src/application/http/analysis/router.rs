use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_product::{__path_analyze_product, analyze_product};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_product))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze", state.args.server.root_path),
        post(analyze_product),
    )
}
