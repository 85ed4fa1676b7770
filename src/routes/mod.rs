pub mod health;
pub mod map;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(map::router())
        .merge(workouts::router())
}
