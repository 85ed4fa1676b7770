use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WorkoutError;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

/// A `[latitude, longitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Result<Self, WorkoutError> {
        let in_range = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !in_range {
            return Err(WorkoutError::InvalidCoords { lat, lng });
        }
        Ok(Self(lat, lng))
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Kind-specific payload. The `kind` tag is written next to the shared
/// fields when a workout is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence: f64,
        pace: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        speed: f64,
    },
}

/// One recorded workout.
///
/// Fields are fixed at construction. Records decoded from storage carry
/// their stored `pace`/`speed`/`label` as-is; nothing is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance: f64,
    duration: f64,
    label: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(WorkoutKind::Running, coords, distance, duration, cadence, Utc::now())
    }

    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            WorkoutKind::Cycling,
            coords,
            distance,
            duration,
            elevation_gain,
            Utc::now(),
        )
    }

    /// Builds a workout of `kind`. `extra` is the cadence for running and
    /// the elevation gain for cycling.
    pub fn new(
        kind: WorkoutKind,
        coords: Coords,
        distance: f64,
        duration: f64,
        extra: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, WorkoutError> {
        let coords = Coords::new(coords.lat(), coords.lng())?;
        let distance = positive("distance", distance)?;
        let duration = positive("duration", duration)?;

        let details = match kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence: positive("cadence", extra)?,
                pace: pace(distance, duration),
            },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain: non_negative("elevationGain", extra)?,
                speed: speed(distance, duration),
            },
        };

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            label: label(kind, &created_at),
            created_at,
            coords,
            distance,
            duration,
            details,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Minutes per kilometer, running only.
    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Kilometers per hour, cycling only.
    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Form input from the map collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub kind: String,
    pub coords: [f64; 2],
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub cadence: Option<f64>,
    #[serde(default)]
    pub elevation_gain: Option<f64>,
}

impl NewWorkout {
    pub fn build(&self, created_at: DateTime<Utc>) -> Result<Workout, WorkoutError> {
        let kind = WorkoutKind::from_name(&self.kind)
            .ok_or_else(|| WorkoutError::UnknownKind(self.kind.clone()))?;
        let coords = Coords::new(self.coords[0], self.coords[1])?;
        let extra = match kind {
            WorkoutKind::Running => self.cadence.ok_or(WorkoutError::MissingField("cadence"))?,
            WorkoutKind::Cycling => self
                .elevation_gain
                .ok_or(WorkoutError::MissingField("elevationGain"))?,
        };
        Workout::new(kind, coords, self.distance, self.duration, extra, created_at)
    }
}

pub fn pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

pub fn speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

fn label(kind: WorkoutKind, created_at: &DateTime<Utc>) -> String {
    format!(
        "{} on {} {}",
        kind.title(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(WorkoutError::NotPositive { field, value });
    }
    Ok(value)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(WorkoutError::Negative { field, value });
    }
    Ok(value)
}
