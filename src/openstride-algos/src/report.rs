use std::fmt::Display;

use openstride_types::WorkoutKind;
use serde::Serialize;

/// Summary of one workout, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub kind: WorkoutKind,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.kind, self.duration, self.distance, self.speed, self.calories
        ))
    }
}
