//! Narrative-vs-directory coverage auditing.
//!
//! Compares the set of resource categories a solution narrative promises
//! against the set actually declared in a directory of `.tf` files, then
//! materializes placeholder blocks for the gap and a flat text report.
//!
//! The audit is non-destructive: it never edits or removes a pre-existing
//! file. Its only outputs are the placeholder file and the report, and
//! re-running it overwrites only those two. Both filenames are excluded from
//! the present-scan so a re-run over an unchanged directory is byte-identical.
//!
//! Concurrent audits of the same directory are not supported — the two
//! output filenames are fixed and unlocked (last writer wins).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Platform, RefineError, Result};
use crate::profile::{profile_for, PlatformProfile};
use crate::report::{render_placeholder, render_report, report_file_name, PLACEHOLDER_FILE_NAME};

/// The four category sets produced by one audit run.
///
/// Invariants: `missing = expected − present`, `extra = present − expected`,
/// so `missing ∩ present = ∅` and `extra ∩ expected = ∅`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageResult {
    /// Categories the narrative mentions.
    pub expected: BTreeSet<&'static str>,
    /// Categories declared in at least one scanned file.
    pub present: BTreeSet<&'static str>,
    /// Expected but not declared anywhere.
    pub missing: BTreeSet<&'static str>,
    /// Declared but never mentioned by the narrative.
    pub extra: BTreeSet<&'static str>,
}

/// What one audit run did on disk.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub coverage: CoverageResult,
    /// Set when missing categories were materialized.
    pub placeholder_path: Option<PathBuf>,
    pub report_path: PathBuf,
    /// Number of configuration files scanned.
    pub scanned_files: usize,
}

/// Pure set computation: no I/O, unit-testable in isolation.
///
/// `file_contents` holds the full text of each scanned configuration file; a
/// category is present if its config rule matches in any one of them.
pub fn compute_coverage(
    narrative: &str,
    file_contents: &[String],
    profile: &PlatformProfile,
) -> CoverageResult {
    let narrative_lower = narrative.to_lowercase();

    let mut expected = BTreeSet::new();
    let mut present = BTreeSet::new();
    for spec in profile.categories {
        if profile.narrative_mentions(&narrative_lower, spec) {
            expected.insert(spec.name);
        }
        if file_contents
            .iter()
            .any(|content| profile.config_matches(content, spec))
        {
            present.insert(spec.name);
        }
    }

    let missing = expected.difference(&present).copied().collect();
    let extra = present.difference(&expected).copied().collect();

    CoverageResult {
        expected,
        present,
        missing,
        extra,
    }
}

/// Run a full audit: scan `tf_dir`, compute coverage against `narrative`,
/// and persist the placeholder file (when something is missing) plus the
/// report.
///
/// # Errors
///
/// - [`RefineError::NoConfigFiles`] — `tf_dir` holds no configuration files
///   (the auditor's own outputs do not count); nothing is written.
/// - [`RefineError::Io`] — a file could not be read or an output could not
///   be written; no partial report is left behind for read failures.
pub fn run_audit(narrative: &str, tf_dir: &Path, platform: Platform) -> Result<AuditOutcome> {
    let profile = profile_for(platform);
    let report_name = report_file_name(platform);

    let mut config_files = Vec::new();
    for entry in fs::read_dir(tf_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let is_tf = path
            .extension()
            .map(|e| e == platform.extension())
            .unwrap_or(false);
        let own_output = name == PLACEHOLDER_FILE_NAME || name == report_name;
        if is_tf && !own_output {
            config_files.push(path);
        }
    }
    config_files.sort();

    if config_files.is_empty() {
        warn!(dir = %tf_dir.display(), "no configuration files to audit");
        return Err(RefineError::NoConfigFiles {
            dir: tf_dir.to_path_buf(),
        });
    }

    let mut file_contents = Vec::with_capacity(config_files.len());
    for path in &config_files {
        file_contents.push(fs::read_to_string(path)?);
    }

    let coverage = compute_coverage(narrative, &file_contents, profile);
    info!(
        platform = %platform,
        expected = coverage.expected.len(),
        present = coverage.present.len(),
        missing = coverage.missing.len(),
        extra = coverage.extra.len(),
        "coverage computed"
    );

    let placeholder_path = if coverage.missing.is_empty() {
        None
    } else {
        let path = tf_dir.join(PLACEHOLDER_FILE_NAME);
        fs::write(&path, render_placeholder(profile, &coverage.missing))?;
        info!(path = %path.display(), "placeholder blocks written");
        Some(path)
    };

    let report_path = tf_dir.join(&report_name);
    fs::write(&report_path, render_report(platform, &coverage))?;
    info!(path = %report_path.display(), "coverage report written");

    Ok(AuditOutcome {
        coverage,
        placeholder_path,
        report_path,
        scanned_files: config_files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_coverage_set_algebra() {
        let profile = profile_for(Platform::Aws);
        let narrative = "We provision a VPC and IAM roles.";
        let files = vec![r#"resource "aws_iam_role" "app" {}"#.to_string()];
        let cov = compute_coverage(narrative, &files, profile);

        assert!(cov.expected.contains("VPC"));
        assert!(cov.expected.contains("IAM"));
        assert!(cov.present.contains("IAM"));
        assert!(cov.missing.contains("VPC"));
        assert!(!cov.missing.contains("IAM"));
        assert!(cov.missing.is_disjoint(&cov.present));
        assert!(cov.extra.is_disjoint(&cov.expected));
    }

    #[test]
    fn test_present_is_union_across_files() {
        let profile = profile_for(Platform::Aws);
        let files = vec![
            r#"resource "aws_vpc" "main" {}"#.to_string(),
            r#"resource "aws_s3_bucket" "logs" {}"#.to_string(),
        ];
        let cov = compute_coverage("", &files, profile);
        assert!(cov.present.contains("VPC"));
        assert!(cov.present.contains("S3"));
        assert!(cov.expected.is_empty());
        assert_eq!(cov.extra, cov.present);
    }
}
