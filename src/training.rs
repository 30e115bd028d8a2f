//! Distance, speed and calorie formulas per workout type.
//!
//! Each workout type implements [`Workout`]; [`Training`] is the tagged union the
//! package factory hands out.

use crate::error::WorkoutError;
use crate::report::Report;
use crate::types::{WorkoutKind, WorkoutSample};
use crate::utils::floor_div;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Shared capability set of every workout type.
///
/// `distance` and `mean_speed` default to the step-based formulas; a workout
/// only has to provide its calorie formula and per-action length.
pub trait Workout {
    /// Metres covered per step or stroke.
    const LEN_STEP: f64;

    fn sample(&self) -> &WorkoutSample;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.sample().action()) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample().duration()
    }

    /// Calories burned (kcal).
    fn spent_calories(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    sample: WorkoutSample,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(sample: WorkoutSample) -> Self {
        Self { sample }
    }
}

impl Workout for Running {
    const LEN_STEP: f64 = 0.65;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.sample.weight()
            / M_IN_KM
            * self.sample.duration()
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    sample: WorkoutSample,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(sample: WorkoutSample, height: f64) -> Result<Self, WorkoutError> {
        if !(height.is_finite() && height > 0.0) {
            return Err(WorkoutError::InvalidArgument {
                name: "height",
                value: height,
            });
        }
        Ok(Self { sample, height })
    }
}

impl Workout for SportsWalking {
    const LEN_STEP: f64 = 0.65;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    // Floor division of speed² by height is part of the published formula.
    fn spent_calories(&self) -> f64 {
        let weight = self.sample.weight();
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * MIN_IN_H
            * self.sample.duration()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    sample: WorkoutSample,
    /// Metres.
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(sample: WorkoutSample, length_pool: f64, count_pool: u32) -> Self {
        Self {
            sample,
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    const LEN_STEP: f64 = 1.38;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    /// Pool laps, not strokes, determine the speed.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.sample.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.sample.weight()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn sample(&self) -> &WorkoutSample {
        match self {
            Self::Running(w) => w.sample(),
            Self::SportsWalking(w) => w.sample(),
            Self::Swimming(w) => w.sample(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance(),
            Self::SportsWalking(w) => w.distance(),
            Self::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed(),
            Self::SportsWalking(w) => w.mean_speed(),
            Self::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::SportsWalking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> Report {
        Report {
            training_type: self.kind().label(),
            duration: self.sample().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Training {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample(action: u32, duration: f64, weight: f64) -> WorkoutSample {
        WorkoutSample::new(action, duration, weight).unwrap()
    }

    #[test]
    fn running_reference_values() {
        let run = Running::new(sample(15000, 1.0, 75.0));
        assert!((run.distance() - 9.75).abs() < EPS);
        assert!((run.mean_speed() - 9.75).abs() < EPS);
        assert!((run.spent_calories() - 699.75).abs() < 1e-6);
    }

    #[test]
    fn walking_floor_division_drops_small_speed_term() {
        let wlk = SportsWalking::new(sample(9000, 1.0, 75.0), 180.0).unwrap();
        assert!((wlk.distance() - 5.85).abs() < EPS);
        assert!((wlk.mean_speed() - 5.85).abs() < EPS);
        // 5.85² = 34.2225, floor(34.2225 / 180) = 0
        assert!((wlk.spent_calories() - 157.5).abs() < 1e-6);
    }

    #[test]
    fn walking_speed_term_counts_whole_multiples_only() {
        // 2 h at 30000 steps: speed 9.75, 9.75² = 95.0625, floor(95.0625 / 40) = 2
        let wlk = SportsWalking::new(sample(30000, 2.0, 60.0), 40.0).unwrap();
        let expected = (0.035 * 60.0 + 2.0 * 0.029 * 60.0) * 60.0 * 2.0;
        assert!((wlk.spent_calories() - expected).abs() < 1e-6);
    }

    #[test]
    fn walking_rejects_non_positive_height() {
        let err = SportsWalking::new(sample(9000, 1.0, 75.0), 0.0).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidArgument {
                name: "height",
                value: 0.0
            }
        );
    }

    #[test]
    fn swimming_speed_comes_from_pool_laps() {
        let swm = Swimming::new(sample(720, 1.0, 80.0), 25.0, 40);
        assert!((swm.distance() - 0.9936).abs() < EPS);
        assert!((swm.mean_speed() - 1.0).abs() < EPS);
        assert!((swm.spent_calories() - 336.0).abs() < 1e-6);
    }

    #[test]
    fn training_delegates_to_its_variant() {
        let run = Running::new(sample(15000, 1.0, 75.0));
        let t = Training::from(run);
        assert_eq!(t.kind(), WorkoutKind::Running);
        assert!((t.spent_calories() - run.spent_calories()).abs() < EPS);

        let info = t.show_training_info();
        assert_eq!(info.training_type, "Running");
        assert!((info.duration - 1.0).abs() < EPS);
        assert!((info.distance - 9.75).abs() < EPS);
    }
}
