use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::error::{AppError, PersistError};
use crate::store::FileStore;
use crate::tracker::Tracker;

#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Opens the file store under `config.data_dir` and loads the log.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let store = FileStore::open(&config.data_dir).map_err(PersistError::from)?;
        let tracker = Tracker::open(Box::new(store), config.map.clone())?;
        Ok(Self::new(tracker))
    }

    pub fn tracker(&self) -> Result<MutexGuard<'_, Tracker>, AppError> {
        self.tracker
            .lock()
            .map_err(|_| AppError::Internal("Workout log lock poisoned".to_string()))
    }
}
