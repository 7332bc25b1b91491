use std::fmt::Debug;

use openstride_types::{WorkoutKind, WorkoutSample};

use crate::{
    CalculationResult, WorkoutError,
    helpers::float_math::positive,
};

pub const M_IN_KM: f64 = 1000.0;
pub const HOURS_TO_MINUTES: f64 = 60.0;

/// Metres covered by one step.
pub const LEN_STEP: f64 = 0.65;

/// Formulas shared by every workout kind.
///
/// Only [`Training::spent_calories`] has no default: each kind burns
/// calories its own way, the rest is overridden where a kind measures
/// distance or speed differently.
pub trait Training: Debug {
    fn kind(&self) -> WorkoutKind;

    fn sample(&self) -> &WorkoutSample;

    /// Metres covered by one action unit.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Kilometres.
    fn distance(&self) -> f64 {
        f64::from(self.sample().action) * self.len_step() / M_IN_KM
    }

    /// Kilometres per hour.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample().duration
    }

    /// Kilocalories.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> CalculationResult {
        CalculationResult {
            kind: self.kind(),
            duration: self.sample().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

pub(crate) fn validate_sample(sample: WorkoutSample) -> Result<WorkoutSample, WorkoutError> {
    positive("duration", sample.duration)?;
    positive("weight", sample.weight)?;
    Ok(sample)
}
