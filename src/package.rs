use crate::dlog;
use crate::error::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::{Package, WorkoutKind, WorkoutSample};
use crate::utils::whole_number;
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

type Constructor = fn(&[f64]) -> Result<Training, WorkoutError>;

/// Workout code -> constructor. A code missing here is an unsupported workout.
const WORKOUTS: [(WorkoutKind, Constructor); 3] = [
    (WorkoutKind::Swimming, build_swimming),
    (WorkoutKind::Running, build_running),
    (WorkoutKind::SportsWalking, build_walking),
];

/// Build the training described by a sensor package.
///
/// `data` is positional: `action, duration, weight` followed by `height` for
/// `WLK` or `length_pool, count_pool` for `SWM`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let &(kind, build) = WORKOUTS
        .iter()
        .find(|(k, _)| k.code() == workout_type)
        .ok_or_else(|| WorkoutError::UnsupportedWorkoutType(workout_type.to_string()))?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            code: kind.code(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let training = build(data)?;
    dlog!(code = kind.code(), ?data, "built training");
    Ok(training)
}

fn base_sample(data: &[f64]) -> Result<WorkoutSample, WorkoutError> {
    let action = whole_number(data[0]).ok_or(WorkoutError::InvalidArgument {
        name: "action",
        value: data[0],
    })?;
    WorkoutSample::new(action, data[1], data[2])
}

fn build_running(data: &[f64]) -> Result<Training, WorkoutError> {
    Ok(Running::new(base_sample(data)?).into())
}

fn build_walking(data: &[f64]) -> Result<Training, WorkoutError> {
    Ok(SportsWalking::new(base_sample(data)?, data[3])?.into())
}

fn build_swimming(data: &[f64]) -> Result<Training, WorkoutError> {
    let count_pool = whole_number(data[4]).ok_or(WorkoutError::InvalidArgument {
        name: "count_pool",
        value: data[4],
    })?;
    Ok(Swimming::new(base_sample(data)?, data[3], count_pool).into())
}

/// Packages rendered when no package file is given.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read packages from a JSON file:
/// `[{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]`
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?;
    let packages =
        parse_packages(&text).with_context(|| format!("parsing packages: {}", path.display()))?;
    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}

pub fn parse_packages(text: &str) -> Result<Vec<Package>> {
    let root: JsonValue = serde_json::from_str(text).context("invalid JSON")?;
    let Some(items) = root.as_array() else {
        bail!("expected a JSON array of packages");
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_package(item).with_context(|| format!("package #{}", i + 1)))
        .collect()
}

fn parse_package(item: &JsonValue) -> Result<Package> {
    let code = item
        .get("workout_type")
        .and_then(JsonValue::as_str)
        .context("missing string field \"workout_type\"")?;
    let values = item
        .get("data")
        .and_then(JsonValue::as_array)
        .context("missing array field \"data\"")?;

    let mut data = Vec::with_capacity(values.len());
    for v in values {
        let Some(x) = v.as_f64() else {
            bail!("non-numeric value in \"data\": {v}");
        };
        data.push(x);
    }

    Ok(Package::new(code, data))
}
