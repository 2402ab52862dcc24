use better_rest::{
    BedtimeEstimator, ClockFormat, CoffeeIntake, EstimateSource, LinearSleepModel, SleepAmount,
    WakeTime,
};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_artifact(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const ARTIFACT: &str = r#"
[model]
name = "SleepCalculator"
version = "test"

[coefficients]
intercept = 0.0
wake = 0.0
estimated_sleep = 1.0
coffee = 0.25

[bounds]
coffee = [0.0, 20.0]
"#;

#[test]
fn test_bundled_model_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/SleepCalculator.toml");
    let model = LinearSleepModel::load(&path).unwrap();
    assert_eq!(model.name(), "SleepCalculator");

    let estimator = BedtimeEstimator::new(model);
    let estimate = estimator.estimate(WakeTime::default(), SleepAmount(7.5), CoffeeIntake(0));
    assert_eq!(estimate.source, EstimateSource::Model);
    assert!(estimate.bedtime.is_before(WakeTime::default()));
}

#[test]
fn test_coffee_shifts_bedtime_earlier() {
    let file = write_artifact(ARTIFACT);
    let estimator = BedtimeEstimator::new(LinearSleepModel::load(file.path()).unwrap());
    let wake = WakeTime::new(7, 0).unwrap();

    // 8h + 4 cups * 15min
    let bedtime = estimator.bedtime(wake, SleepAmount(8.0), CoffeeIntake(4));
    assert_eq!(bedtime.format(ClockFormat::TwentyFourHour), "22:00");
    assert_eq!(bedtime.format(ClockFormat::TwelveHour), "10:00 PM");
    assert_eq!(bedtime.day_offset(), -1);
}

#[test]
fn test_out_of_range_feature_uses_fallback() {
    let file = write_artifact(ARTIFACT);
    let estimator = BedtimeEstimator::new(LinearSleepModel::load(file.path()).unwrap());

    let estimate = estimator.estimate(WakeTime::default(), SleepAmount(8.0), CoffeeIntake(25));
    assert_eq!(estimate.source, EstimateSource::Fallback);
    assert_eq!(estimate.bedtime.to_string(), "01:00");
}

#[test]
fn test_unloadable_artifacts_are_unavailable() {
    assert!(LinearSleepModel::load("no/such/model.toml").is_err());

    let malformed = write_artifact("[model\nname = ");
    assert!(LinearSleepModel::load(malformed.path()).is_err());

    let nan = write_artifact(&ARTIFACT.replace("coffee = 0.25", "coffee = nan"));
    let err = LinearSleepModel::load(nan.path()).unwrap_err();
    assert!(err.reason.contains("coefficients.coffee"));
}

#[test]
fn test_failed_load_still_estimates() {
    let model = LinearSleepModel::load("no/such/model.toml").ok();
    let estimator = BedtimeEstimator::new(model);
    let estimate = estimator.estimate(WakeTime::default(), SleepAmount(4.0), CoffeeIntake(0));
    assert_eq!(estimate.source, EstimateSource::Fallback);
    assert_eq!(estimate.bedtime.to_string(), "05:00");
}
