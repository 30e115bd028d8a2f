use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn packages_file(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f
}

#[test]
fn test_demo_packages_without_arguments() {
    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.env_remove("RUST_LOG");

    cmd.assert().success().stdout(
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Ave. speed: 1.000 km/h; Calories burned: 336.000.\n\
         Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Ave. speed: 9.750 km/h; Calories burned: 699.750.\n\
         Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
         Ave. speed: 5.850 km/h; Calories burned: 157.500.\n",
    );
}

#[test]
fn test_packages_from_file() {
    let file = packages_file(
        r#"[{"workout_type": "RUN", "data": [15000, 0.5, 75]},
            {"workout_type": "SWM", "data": [720, 2, 80, 25, 40]}]"#,
    );

    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.arg(file.path()).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Training type: Running; Duration: 0.500 h.; Distance: 9.750 km; \
             Ave. speed: 19.500 km/h;",
        ))
        .stdout(predicate::str::contains(
            "Training type: Swimming; Duration: 2.000 h.; Distance: 0.994 km; \
             Ave. speed: 0.500 km/h; Calories burned: 256.000.",
        ));
}

#[test]
fn test_unsupported_workout_type_fails() {
    let file = packages_file(r#"[{"workout_type": "BIK", "data": [1000, 1, 70]}]"#);

    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("package #1 (BIK)"))
        .stderr(predicate::str::contains("Unsupported workout type"));
}

#[test]
fn test_zero_duration_fails_after_earlier_reports() {
    let file = packages_file(
        r#"[{"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 0, 75, 180]}]"#,
    );

    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Training type: Running;"))
        .stderr(predicate::str::contains("package #2 (WLK)"))
        .stderr(predicate::str::contains("Duration must be a positive"));
}

#[test]
fn test_missing_packages_file_fails() {
    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.arg("/nonexistent/packages.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading packages"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("fitstats").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PACKAGES"))
        .stdout(predicate::str::contains("--verbose"));
}
