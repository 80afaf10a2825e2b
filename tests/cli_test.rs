//! Integration tests for the command-line interface
use assert_cmd::Command;
use predicates::prelude::*;

const FINDINGS_JSON: &str = r#"[
    {
        "auth_method": "profile: default",
        "timestamp": "2026-08-06T12:00:00Z",
        "account_uid": "123456789012",
        "account_name": "production",
        "uid": "finding-001",
        "status": "PASS",
        "status_extended": "Root account has MFA enabled",
        "region": "us-east-1",
        "partition": "aws",
        "resource_uid": "arn:aws:iam::123456789012:root",
        "metadata": {
            "provider": "aws",
            "check_id": "iam_root_mfa_enabled",
            "check_title": "Ensure MFA is enabled for the root account",
            "service_name": "iam",
            "severity": "critical",
            "resource_type": "AwsIamUser"
        }
    },
    {
        "auth_method": "profile: default",
        "timestamp": "2026-08-06T12:00:01Z",
        "account_uid": "123456789012",
        "account_name": "production",
        "uid": "finding-002",
        "status": "FAIL",
        "status_extended": "Bucket allows public reads",
        "region": "eu-west-1",
        "partition": "aws",
        "resource_uid": "arn:aws:s3:::public-bucket",
        "metadata": {
            "provider": "aws",
            "check_id": "s3_bucket_public_access",
            "check_title": "Ensure buckets are not publicly accessible",
            "service_name": "s3",
            "severity": "high",
            "resource_type": "AwsS3Bucket"
        }
    }
]"#;

fn write_findings_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("findings.json");
    std::fs::write(&path, FINDINGS_JSON).unwrap();
    path
}

#[test]
fn test_csv_export_appends_with_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let findings_path = write_findings_file(&dir);
    let csv_path = dir.path().join("report.csv");

    for _ in 0..2 {
        Command::cargo_bin("cloudaudit")
            .unwrap()
            .arg(&findings_path)
            .args(["--format", "csv", "--output"])
            .arg(&csv_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Loaded 2 findings"));
    }

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.starts_with("AUTH_METHOD;"))
            .count(),
        1
    );
}

#[test]
fn test_text_format_prints_summary_table() {
    let dir = tempfile::tempdir().unwrap();
    let findings_path = write_findings_file(&dir);

    Command::cargo_bin("cloudaudit")
        .unwrap()
        .arg(&findings_path)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iam_root_mfa_enabled"))
        .stdout(predicate::str::contains("s3_bucket_public_access"));
}

#[test]
fn test_status_filter_keeps_matching_findings() {
    let dir = tempfile::tempdir().unwrap();
    let findings_path = write_findings_file(&dir);

    Command::cargo_bin("cloudaudit")
        .unwrap()
        .arg(&findings_path)
        .args(["--format", "jsonl", "--status", "fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finding-002"))
        .stdout(predicate::str::contains("finding-001").not());
}

#[test]
fn test_check_filter_reports_when_nothing_matches() {
    let dir = tempfile::tempdir().unwrap();
    let findings_path = write_findings_file(&dir);

    Command::cargo_bin("cloudaudit")
        .unwrap()
        .arg(&findings_path)
        .args(["--check", "^rds_"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No findings found matching the specified criteria.",
        ));
}
