use log_aggregator::commands::{execute_analyze, validate_args, validate_report_file, AnalyzeArgs};
use log_aggregator::output::write_report;
use log_aggregator::utils::error::AggregateError;
use std::path::PathBuf;

fn write_source(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        input: PathBuf::from("uploads/server.TXT"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_rejects_extension() {
    let args = AnalyzeArgs {
        input: PathBuf::from("uploads/server.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_rejects_missing_extension() {
    let args = AnalyzeArgs {
        input: PathBuf::from("uploads/server"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_analyze_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "app.log", "a,Warning,oops\nb,Error,bad\n");
    let output = dir.path().join("out/report.json");

    let report = execute_analyze(AnalyzeArgs {
        input: input.clone(),
        output_json: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(report.analysis.total_lines, 2);
    assert_eq!(report.analysis.filename, "app.log");
    assert!(output.exists());
    assert!(input.exists());

    let validated = validate_report_file(&output).unwrap();
    assert_eq!(validated.analysis, report.analysis);
}

#[test]
fn test_execute_analyze_removes_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "upload.log", "t,Error,x\n");

    execute_analyze(AnalyzeArgs {
        input: input.clone(),
        output_json: Some(dir.path().join("report.json")),
        remove_source: true,
        ..Default::default()
    })
    .unwrap();

    assert!(!input.exists());
}

#[test]
fn test_execute_analyze_removes_source_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "upload.log", "t,Error,x\n");

    let result = execute_analyze(AnalyzeArgs {
        input: input.clone(),
        output_json: Some(dir.path().join("report.json")),
        max_bytes: 2,
        remove_source: true,
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!input.exists());
}

#[test]
fn test_execute_analyze_missing_source() {
    let dir = tempfile::tempdir().unwrap();

    let err = execute_analyze(AnalyzeArgs {
        input: dir.path().join("gone.log"),
        output_json: Some(dir.path().join("report.json")),
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.to_string().starts_with("Could not read file"));
    assert!(matches!(
        err.downcast_ref::<AggregateError>(),
        Some(AggregateError::SourceUnavailable { .. })
    ));
    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_validate_report_rejects_inconsistent_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source(&dir, "app.log", "a,Error,x\n");
    let output = dir.path().join("report.json");

    let mut report = execute_analyze(AnalyzeArgs {
        input,
        output_json: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    report.analysis.errors_found = 7;
    write_report(&report, &output).unwrap();

    assert!(validate_report_file(&output).is_err());
}
