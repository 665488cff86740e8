use std::fs;

use eqs_core::{EqsError, FallbackPolicy, SolverConfig, Tolerance};

#[test]
fn loads_yaml_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("solver.yaml");
    fs::write(
        &path,
        "tolerance: 1.0e-6\nprecision: 4\nlinear_fallback: never\n",
    )
    .expect("write config");

    let config = SolverConfig::load(&path).expect("load config");
    assert_eq!(config.precision, 4);
    assert_eq!(config.linear_fallback, FallbackPolicy::Never);
    assert_eq!(config.tolerance().unwrap(), Tolerance::new(1e-6).unwrap());
}

#[test]
fn invalid_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "tolerance: 0\n").expect("write config");

    let err = SolverConfig::load(&path).unwrap_err();
    assert!(matches!(err, EqsError::Config(_)));
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SolverConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.info().code, "config-read");
}
