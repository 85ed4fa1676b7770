//! Running and cycling workout log for a map-based tracker UI.
//!
//! Workouts are built from a map coordinate plus form values, kept in
//! insertion order and mirrored to a flat key/value store under the
//! `workouts` key.

pub mod config;
pub mod error;
pub mod persist;
pub mod routes;
pub mod state;
pub mod store;
pub mod tracker;
pub mod types;
