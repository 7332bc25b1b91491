use openstride_types::{WorkoutKind, WorkoutSample};

use crate::{
    WorkoutError,
    helpers::float_math::{floor_div, positive},
    training::{HOURS_TO_MINUTES, Training, validate_sample},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    sample: WorkoutSample,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const COEFF_CALORIES_1: f64 = 0.035;
    const COEFF_CALORIES_2: f64 = 0.029;

    pub fn new(sample: WorkoutSample, height: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            sample: validate_sample(sample)?,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn spent_calories(&self) -> f64 {
        let mean_speed = self.mean_speed();
        let weight = self.sample.weight;
        // speed^2 / height is floored, not divided
        (Self::COEFF_CALORIES_1 * weight
            + floor_div(mean_speed.powi(2), self.height) * Self::COEFF_CALORIES_2 * weight)
            * self.sample.duration
            * HOURS_TO_MINUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_walk() {
        let walk = SportsWalking::new(WorkoutSample::new(9000, 1.0, 75.0), 180.0).unwrap();
        assert!((walk.distance() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed() - 5.85).abs() < 1e-9);
        // 5.85^2 = 34.2225, floored against 180 -> 0, only the weight term remains
        assert!((walk.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn speed_term_counts_in_whole_multiples() {
        // 30000 steps in 1h -> 19.5 km/h, 19.5^2 = 380.25 -> floor(380.25 / 180) = 2
        let walk = SportsWalking::new(WorkoutSample::new(30000, 1.0, 75.0), 180.0).unwrap();
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < 1e-9);

        let true_division = (0.035 * 75.0 + 380.25 / 180.0 * 0.029 * 75.0) * 60.0;
        assert!(walk.spent_calories() < true_division);
    }

    #[test]
    fn rejects_zero_height() {
        let err = SportsWalking::new(WorkoutSample::new(9000, 1.0, 75.0), 0.0).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidInput {
                field: "height",
                value: 0.0
            }
        );
    }

    #[test]
    fn uses_walking_label() {
        let walk = SportsWalking::new(WorkoutSample::new(9000, 1.0, 75.0), 180.0).unwrap();
        assert_eq!(walk.kind().to_string(), "SportsWalking");
        assert_eq!(walk.height(), 180.0);
    }
}
