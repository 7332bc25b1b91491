use openstride_types::{WorkoutKind, WorkoutSample};

use crate::{
    WorkoutError,
    training::{HOURS_TO_MINUTES, M_IN_KM, Training, validate_sample},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    sample: WorkoutSample,
}

impl Running {
    const COEFF_CALORIES_1: f64 = 18.0;
    const COEFF_CALORIES_2: f64 = 20.0;

    pub fn new(sample: WorkoutSample) -> Result<Self, WorkoutError> {
        Ok(Self {
            sample: validate_sample(sample)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn spent_calories(&self) -> f64 {
        let mean_speed = self.mean_speed();
        (Self::COEFF_CALORIES_1 * mean_speed - Self::COEFF_CALORIES_2) * self.sample.weight
            / M_IN_KM
            * self.sample.duration
            * HOURS_TO_MINUTES
    }
}
