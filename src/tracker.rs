use chrono::Utc;

use crate::error::{PersistError, TrackerError};
use crate::persist;
use crate::store::FlatStore;
use crate::types::map::{MapSettings, MapView};
use crate::types::workout::{NewWorkout, Workout};

/// Owns the workout collection and mirrors it to the store after every
/// change.
pub struct Tracker {
    store: Box<dyn FlatStore + Send>,
    workouts: Vec<Workout>,
    map: MapSettings,
}

impl Tracker {
    pub fn open(store: Box<dyn FlatStore + Send>, map: MapSettings) -> Result<Self, PersistError> {
        let workouts = persist::load(store.as_ref())?;
        tracing::info!("Loaded {} workouts from store", workouts.len());
        Ok(Self {
            store,
            workouts,
            map,
        })
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn map_settings(&self) -> &MapSettings {
        &self.map
    }

    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn add_workout(&mut self, input: &NewWorkout) -> Result<&Workout, TrackerError> {
        let workout = input.build(Utc::now())?;
        Ok(self.record(workout)?)
    }

    /// Appends an already-built workout and saves. On a failed save the
    /// workout is dropped again so memory matches the store.
    pub fn record(&mut self, workout: Workout) -> Result<&Workout, PersistError> {
        self.workouts.push(workout);
        if let Err(err) = persist::save(self.store.as_mut(), &self.workouts) {
            self.workouts.pop();
            return Err(err);
        }

        let index = self.workouts.len() - 1;
        let workout = &self.workouts[index];
        tracing::info!(
            "Recorded {} ({}, {:.2} km, {:.0} min)",
            workout.label(),
            workout.id(),
            workout.distance(),
            workout.duration()
        );
        Ok(workout)
    }

    pub fn view_of(&self, id: &str) -> Option<MapView> {
        self.get(id).map(|workout| MapView {
            center: workout.coords(),
            zoom: self.map.zoom_level,
        })
    }

    /// Drops every workout, in the store and in memory.
    pub fn reset(&mut self) -> Result<(), PersistError> {
        persist::reset(self.store.as_mut())?;
        let dropped = self.workouts.len();
        self.workouts.clear();
        tracing::warn!("Reset workout log, dropped {} workouts", dropped);
        Ok(())
    }
}
