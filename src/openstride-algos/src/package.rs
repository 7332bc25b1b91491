use openstride_types::{WorkoutKind, WorkoutSample};

use crate::{
    Running, SportsWalking, Swimming, Training, WorkoutError, helpers::float_math::whole,
};

/// Number of values a sensor package carries for each kind.
pub fn expected_args(kind: WorkoutKind) -> usize {
    match kind {
        WorkoutKind::Running => 3,
        WorkoutKind::Walking => 4,
        WorkoutKind::Swimming => 5,
    }
}

/// Builds the training described by a sensor package.
///
/// `data` is positional: action, duration, weight, then the kind specific
/// values (height for `WLK`, pool length and lap count for `SWM`).
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let kind: WorkoutKind = code.parse()?;

    let training: Box<dyn Training> = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Box::new(Running::new(sample(action, duration, weight)?)?)
        }
        (WorkoutKind::Walking, &[action, duration, weight, height]) => Box::new(
            SportsWalking::new(sample(action, duration, weight)?, height)?,
        ),
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Box::new(Swimming::new(
                sample(action, duration, weight)?,
                length_pool,
                whole("count_pool", count_pool)?,
            )?)
        }
        _ => {
            return Err(WorkoutError::ArgumentCount {
                kind,
                expected: expected_args(kind),
                actual: data.len(),
            });
        }
    };

    debug!("{} package read as {:?}", code, training);
    Ok(training)
}

fn sample(action: f64, duration: f64, weight: f64) -> Result<WorkoutSample, WorkoutError> {
    Ok(WorkoutSample::new(whole("action", action)?, duration, weight))
}
