#[macro_use]
extern crate log;

mod error;
pub use error::WorkoutError;

pub(crate) mod training;
pub use training::{HOURS_TO_MINUTES, LEN_STEP, M_IN_KM, Training};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::SportsWalking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod report;
pub use report::CalculationResult;

pub(crate) mod package;
pub use package::{expected_args, read_package};

pub mod helpers;

#[cfg(test)]
mod tests {
    use openstride_types::WorkoutSample;
    use rand::Rng;

    use super::*;

    fn random_trainings(count: usize) -> Vec<Box<dyn Training>> {
        let mut rng = rand::rng();
        (0..count)
            .map(|i| {
                let sample = WorkoutSample::new(
                    rng.random_range(0..=60_000),
                    rng.random_range(0.01..5.0),
                    rng.random_range(30.0..200.0),
                );
                let training: Box<dyn Training> = match i % 3 {
                    0 => Box::new(Running::new(sample).unwrap()),
                    1 => Box::new(
                        SportsWalking::new(sample, rng.random_range(100.0..220.0)).unwrap(),
                    ),
                    _ => Box::new(
                        Swimming::new(
                            sample,
                            rng.random_range(10.0..50.0),
                            rng.random_range(0..200),
                        )
                        .unwrap(),
                    ),
                };
                training
            })
            .collect()
    }

    #[test]
    fn distance_and_speed_never_negative() {
        for training in random_trainings(300) {
            assert!(training.distance() >= 0.0, "{training:?}");
            assert!(training.mean_speed() >= 0.0, "{training:?}");
            assert!(training.spent_calories().is_finite(), "{training:?}");
        }
    }

    #[test]
    fn reports_are_idempotent() {
        for training in random_trainings(30) {
            assert_eq!(training.show_training_info(), training.show_training_info());
        }
    }

    #[test]
    fn report_carries_computed_values() {
        let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let info = training.show_training_info();
        assert_eq!(info.kind, openstride_types::WorkoutKind::Swimming);
        assert_eq!(info.duration, 1.0);
        assert_eq!(info.distance, training.distance());
        assert_eq!(info.speed, training.mean_speed());
        assert_eq!(info.calories, training.spent_calories());
    }

    #[test]
    fn swimming_and_walking_calories_are_positive() {
        for training in random_trainings(90) {
            if training.kind() != openstride_types::WorkoutKind::Running {
                assert!(training.spent_calories() > 0.0, "{training:?}");
            }
        }
    }
}
