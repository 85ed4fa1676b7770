use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{0} is required for this workout type")]
    MissingField(&'static str),
    #[error("Unknown workout type: {0}")]
    UnknownKind(String),
    #[error("Coordinates out of range: [{lat}, {lng}]")]
    InvalidCoords { lat: f64, lng: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Stored workouts are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("Failed to encode workouts: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Invalid(#[from] WorkoutError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Workout(#[from] WorkoutError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("Workout not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Invalid(err) => AppError::Workout(err),
            TrackerError::Persist(err) => AppError::Persist(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Workout(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Persist(_) | AppError::Internal(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
