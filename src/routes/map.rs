use axum::{extract::State, routing::get, Json, Router};

use crate::error::AppError;
use crate::state::AppState;
use crate::types::map::MapSettings;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/map", get(map_settings))
}

async fn map_settings(State(state): State<AppState>) -> Result<Json<MapSettings>, AppError> {
    let tracker = state.tracker()?;
    Ok(Json(tracker.map_settings().clone()))
}
