use openstride_types::{WorkoutKind, WorkoutSample};

use crate::{
    WorkoutError,
    helpers::float_math::positive,
    training::{M_IN_KM, Training, validate_sample},
};

/// Pool swim. Distance still counts strokes, speed counts laps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    sample: WorkoutSample,
    /// Metres.
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Metres covered by one stroke.
    const LEN_STEP: f64 = 1.38;
    const COEFF_CALORIES_1: f64 = 1.1;
    const COEFF_CALORIES_2: f64 = 2.0;

    pub fn new(
        sample: WorkoutSample,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            sample: validate_sample(sample)?,
            length_pool: positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.sample.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::COEFF_CALORIES_1) * Self::COEFF_CALORIES_2 * self.sample.weight
    }
}
