pub mod workouts;
pub use workouts::{UnknownWorkoutKind, WorkoutKind, WorkoutSample};
