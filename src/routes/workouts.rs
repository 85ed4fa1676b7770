use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::types::map::MapView;
use crate::types::view::WorkoutView;
use crate::types::workout::NewWorkout;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts).post(create_workout).delete(reset_workouts),
        )
        .route("/api/workouts/:id", get(show_workout))
}

#[derive(Serialize)]
struct WorkoutList {
    workouts: Vec<WorkoutView>,
}

#[derive(Serialize)]
struct WorkoutDetail {
    workout: WorkoutView,
    view: MapView,
}

#[derive(Serialize)]
struct ResetResponse {
    reload: bool,
}

async fn list_workouts(State(state): State<AppState>) -> Result<Json<WorkoutList>, AppError> {
    let tracker = state.tracker()?;
    let workouts = tracker.workouts().iter().map(WorkoutView::from).collect();
    Ok(Json(WorkoutList { workouts }))
}

async fn create_workout(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkout>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutView>), AppError> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut tracker = state.tracker()?;
    let workout = tracker.add_workout(&input)?;

    Ok((StatusCode::CREATED, Json(WorkoutView::from(workout))))
}

async fn show_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutDetail>, AppError> {
    let tracker = state.tracker()?;
    let workout = tracker
        .get(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    let view = tracker
        .view_of(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    Ok(Json(WorkoutDetail {
        workout: WorkoutView::from(workout),
        view,
    }))
}

async fn reset_workouts(State(state): State<AppState>) -> Result<Json<ResetResponse>, AppError> {
    state.tracker()?.reset()?;
    Ok(Json(ResetResponse { reload: true }))
}
