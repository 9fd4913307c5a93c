pub mod export;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Static assets the editor fetches directly (template, stylesheet, example data).
    let templates = ServeDir::new(&state.config.assets_dir);
    let data = ServeDir::new(&state.config.data_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/export-pdf", post(export::handle_export_pdf))
        .route("/api/preview", post(export::handle_preview))
        .nest_service("/templates", templates)
        .nest_service("/data", data)
        .with_state(state)
}
