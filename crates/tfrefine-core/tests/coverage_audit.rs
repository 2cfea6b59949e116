use std::fs;
use std::path::Path;

use tempfile::tempdir;
use tfrefine_core::{run_audit, Platform, RefineError, PLACEHOLDER_FILE_NAME};

fn write_tf(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

const IAM_ONLY: &str = r#"resource "aws_iam_role" "app" {
  name = "app"
}
"#;

#[test]
fn missing_component_gets_placeholder_and_report() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "iam.tf", IAM_ONLY);
    let narrative = "The design relies on a VPC and IAM roles.";

    let outcome = run_audit(narrative, dir.path(), Platform::Aws).expect("audit");

    assert!(outcome.coverage.expected.contains("VPC"));
    assert!(outcome.coverage.expected.contains("IAM"));
    assert_eq!(
        outcome.coverage.present.iter().copied().collect::<Vec<_>>(),
        vec!["IAM"]
    );
    assert!(outcome.coverage.missing.contains("VPC"));
    assert!(outcome.coverage.extra.is_empty());

    let placeholder = outcome.placeholder_path.expect("placeholder written");
    let placeholder_text = fs::read_to_string(&placeholder).expect("read placeholder");
    assert!(placeholder_text.contains("aws_vpc"));
    assert!(placeholder_text.starts_with('#'), "banner comes first");

    let report = fs::read_to_string(&outcome.report_path).expect("read report");
    assert!(report.contains("AWS refinement summary"));
    assert!(report.contains(r#"["IAM", "VPC"]"#));
    assert!(report.ends_with("No pre-existing .tf file was modified.\n"));
}

#[test]
fn nothing_expected_means_no_placeholder() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "net.tf", "resource \"aws_vpc\" \"main\" {}\n");

    let outcome = run_audit("no recognized component names", dir.path(), Platform::Aws)
        .expect("audit");

    assert!(outcome.coverage.expected.is_empty());
    assert!(outcome.coverage.missing.is_empty());
    assert!(outcome.placeholder_path.is_none());
    assert!(!dir.path().join(PLACEHOLDER_FILE_NAME).exists());
    // Report is still written, with the extras recorded.
    let report = fs::read_to_string(&outcome.report_path).expect("read report");
    assert!(report.contains(r#"Extra components (present but not expected): ["VPC"]"#));
}

#[test]
fn empty_directory_aborts_without_writing() {
    let dir = tempdir().expect("tempdir");
    let err = run_audit("a VPC", dir.path(), Platform::Aws).unwrap_err();
    assert!(matches!(err, RefineError::NoConfigFiles { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn non_tf_files_do_not_count_as_configuration() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "notes.txt", "resource \"aws_vpc\" \"main\" {}");
    let err = run_audit("a VPC", dir.path(), Platform::Aws).unwrap_err();
    assert!(matches!(err, RefineError::NoConfigFiles { .. }));
}

#[test]
fn rerun_is_idempotent_and_non_destructive() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "iam.tf", IAM_ONLY);
    let narrative = "A VPC plus IAM.";

    let first = run_audit(narrative, dir.path(), Platform::Aws).expect("first audit");
    let report_1 = fs::read_to_string(&first.report_path).expect("report");
    let placeholder_1 =
        fs::read_to_string(dir.path().join(PLACEHOLDER_FILE_NAME)).expect("placeholder");

    let second = run_audit(narrative, dir.path(), Platform::Aws).expect("second audit");
    let report_2 = fs::read_to_string(&second.report_path).expect("report");
    let placeholder_2 =
        fs::read_to_string(dir.path().join(PLACEHOLDER_FILE_NAME)).expect("placeholder");

    // The auditor's own outputs are excluded from the scan, so the second
    // run sees the same directory and produces byte-identical artifacts.
    assert_eq!(report_1, report_2);
    assert_eq!(placeholder_1, placeholder_2);
    assert_eq!(first.coverage, second.coverage);
    assert_eq!(second.scanned_files, 1);

    // Pre-existing files are untouched.
    let iam = fs::read_to_string(dir.path().join("iam.tf")).expect("read iam.tf");
    assert_eq!(iam, IAM_ONLY);
}

#[test]
fn newly_extracted_files_do_count_on_rescan() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "iam.tf", IAM_ONLY);
    let narrative = "A VPC plus IAM.";

    let first = run_audit(narrative, dir.path(), Platform::Aws).expect("first audit");
    assert!(first.coverage.missing.contains("VPC"));

    // Someone authors the missing component as a real file.
    write_tf(dir.path(), "vpc.tf", "resource \"aws_vpc\" \"main\" {}\n");
    let second = run_audit(narrative, dir.path(), Platform::Aws).expect("second audit");
    assert!(second.coverage.missing.is_empty());
    assert!(second.placeholder_path.is_none());
}

#[test]
fn azure_audit_uses_azure_vocabulary() {
    let dir = tempdir().expect("tempdir");
    write_tf(
        dir.path(),
        "cluster.tf",
        "resource \"azurerm_kubernetes_cluster\" \"main\" {}\n",
    );

    let outcome = run_audit("An AKS cluster behind a Firewall.", dir.path(), Platform::Azure)
        .expect("audit");

    assert!(outcome.coverage.expected.contains("AKS"));
    assert!(outcome.coverage.expected.contains("Firewall"));
    assert!(outcome.coverage.present.contains("AKS"));
    assert!(outcome.coverage.missing.contains("Firewall"));
    assert!(outcome
        .report_path
        .to_string_lossy()
        .ends_with("refine_summary_azure.log"));
}

#[test]
fn narrative_match_is_permissive_substring() {
    let dir = tempdir().expect("tempdir");
    write_tf(dir.path(), "main.tf", "resource \"google_compute_network\" \"n\" {}\n");

    // "gke" appears inside a longer word; the unanchored rule still fires.
    let outcome = run_audit("we keep ungked notes", dir.path(), Platform::Gcp).expect("audit");
    assert!(outcome.coverage.expected.contains("GKE"));
}
