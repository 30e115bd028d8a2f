use thiserror::Error;

/// Errors raised while turning a sensor package into a [`crate::training::Training`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unsupported workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnsupportedWorkoutType(String),

    #[error("Workout {code} takes {expected} arguments, got {got}")]
    ArgumentCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Duration must be a positive number of hours, got {0}")]
    NonPositiveDuration(f64),

    #[error("Invalid value for {name}: {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}
