use crate::error::WorkoutError;
use std::str::FromStr;

/// Raw readings shared by every workout type.
///
/// Only [`WorkoutSample::new`] builds one, so `duration` is always > 0:
///
/// ```compile_fail
/// use fitstats::WorkoutSample;
///
/// let sample = WorkoutSample { action: 15000, duration: 0.0, weight: 75.0 };
/// ```
///
/// `action` is a `u32`: tracker packages with more than `u32::MAX` (4 294 967 295)
/// steps or strokes are rejected by the package reader as invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSample {
    action: u32,
    duration: f64,
    weight: f64,
}

impl WorkoutSample {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(WorkoutError::NonPositiveDuration(duration));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    /// Steps (running, walking) or strokes (swimming).
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Hours.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Kilograms.
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter code used by the sensor packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name printed in the report.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| WorkoutError::UnsupportedWorkoutType(s.to_string()))
    }
}

/// One `(workout code, positional data)` pair as emitted by a tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}
