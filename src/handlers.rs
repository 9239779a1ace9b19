use crate::models::{DayView, SnapshotView};
use crate::state::AppState;
use crate::storage::load_snapshot;
use crate::ui::render_index;
use crate::view;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Local;

/// The cache is re-read on every request so a fresh generate run shows up
/// without restarting the server.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = load_snapshot(&state.data_path).await;
    let school_name = snapshot
        .school
        .as_ref()
        .map(|school| school.name.clone())
        .unwrap_or_else(|| state.school.name.clone());
    Html(render_index(&school_name))
}

pub async fn get_snapshot(State(state): State<AppState>) -> Json<SnapshotView> {
    let snapshot = load_snapshot(&state.data_path).await;
    let today = Local::now().date_naive();
    Json(view::snapshot_view(&snapshot, today, &state.school.name))
}

pub async fn get_day(State(state): State<AppState>, Path(date): Path<String>) -> Json<DayView> {
    let snapshot = load_snapshot(&state.data_path).await;
    Json(view::day_view(&snapshot, &date))
}
