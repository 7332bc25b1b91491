use openstride_types::{UnknownWorkoutKind, WorkoutKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    UnknownWorkoutKind(#[from] UnknownWorkoutKind),
    #[error("{kind} expects {expected} values, got {actual}")]
    ArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
