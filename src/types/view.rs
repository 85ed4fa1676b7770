use serde::Serialize;

use crate::types::workout::{Workout, WorkoutDetails, WorkoutKind};

/// A workout plus the values the list row and marker popup display.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutView {
    #[serde(flatten)]
    pub workout: Workout,
    pub display: Display,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub icon: String,
    pub popup_class: String,
    pub popup_text: String,
    pub distance: Stat,
    pub duration: Stat,
    pub metric: Stat,
    pub extra: Stat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub value: String,
    pub unit: String,
}

impl Stat {
    fn new(value: String, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

impl From<&Workout> for WorkoutView {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        let icon = icon(kind);

        let (metric, extra) = match workout.details() {
            WorkoutDetails::Running { cadence, pace } => (
                Stat::new(format!("{:.1}", pace), "min/km"),
                Stat::new(cadence.to_string(), "spm"),
            ),
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => (
                Stat::new(format!("{:.1}", speed), "km/h"),
                Stat::new(elevation_gain.to_string(), "m"),
            ),
        };

        Self {
            display: Display {
                icon: icon.to_string(),
                popup_class: format!("{}-popup", kind.as_str()),
                popup_text: format!("{} {}", icon, workout.label()),
                distance: Stat::new(workout.distance().to_string(), "km"),
                duration: Stat::new(workout.duration().to_string(), "min"),
                metric,
                extra,
            },
            workout: workout.clone(),
        }
    }
}

fn icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}
