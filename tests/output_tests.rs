use admission_summary::commands::validate_report_file;
use admission_summary::output::{read_report, validate_path, write_report};
use admission_summary::{GroupSummary, Report};
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> Report {
    let mut report = Report::default();
    report.groups.insert(
        1,
        GroupSummary {
            admission_rate: 0.541,
            gpa_threshold: Some(2.42),
            gpa_admitted_mean: Some(3.49),
            gpa_admitted_std: Some(0.38),
        },
    );
    report.groups.insert(
        4,
        GroupSummary {
            admission_rate: 0.0,
            gpa_threshold: None,
            gpa_admitted_mean: None,
            gpa_admitted_std: None,
        },
    );
    report
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_nulls_survive_on_disk() {
    let temp_file = NamedTempFile::new().unwrap();
    write_report(&create_test_report(), temp_file.path()).unwrap();

    let text = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(text.contains("\"gpa_threshold\": null"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_validate_report_file() {
    let temp_file = NamedTempFile::new().unwrap();
    write_report(&create_test_report(), temp_file.path()).unwrap();

    let report = validate_report_file(temp_file.path().to_path_buf()).unwrap();
    assert_eq!(report.len(), 2);
}

#[test]
fn test_validate_rejects_garbage() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{\"1\": {\"admission_rate\": \"high\"}}").unwrap();

    assert!(validate_report_file(temp_file.path().to_path_buf()).is_err());
}
