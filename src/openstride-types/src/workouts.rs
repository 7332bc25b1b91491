use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    #[serde(rename = "Running")]
    Running,
    #[serde(rename = "SportsWalking")]
    Walking,
    #[serde(rename = "Swimming")]
    Swimming,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown workout kind: `{0}`")]
pub struct UnknownWorkoutKind(pub String);

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Code the sensor sends in front of each data package.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }
}

impl Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownWorkoutKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            "SWM" => Ok(Self::Swimming),
            _ => Err(UnknownWorkoutKind(s.to_owned())),
        }
    }
}

/// Readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Steps or strokes counted by the sensor.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl WorkoutSample {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}
