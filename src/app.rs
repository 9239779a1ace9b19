use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/menu", get(handlers::get_snapshot))
        .route("/api/menu/:date", get(handlers::get_day))
        .with_state(state)
}
