use axum::Router;
use workout_log::routes;
use workout_log::state::AppState;
use workout_log::store::MemoryStore;
use workout_log::tracker::Tracker;
use workout_log::types::map::MapSettings;

#[allow(dead_code)]
pub fn tracker() -> Tracker {
    Tracker::open(Box::new(MemoryStore::new()), MapSettings::default()).expect("open tracker")
}

#[allow(dead_code)]
pub fn app() -> Router {
    routes::router().with_state(AppState::new(tracker()))
}
