//! Distance, mean speed and calorie statistics for running, sports walking and
//! swimming workouts, computed from raw tracker packages.

pub mod cli;
pub mod error;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::WorkoutError;
pub use package::read_package;
pub use report::Report;
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use types::{Package, WorkoutKind, WorkoutSample};
