//! Rendering of audit artifacts: the placeholder file and the text report.
//!
//! Pure string builders — persistence decisions stay in `audit`, so the
//! formats are testable without touching a filesystem.

use std::collections::BTreeSet;

use crate::audit::CoverageResult;
use crate::domain::Platform;
use crate::profile::PlatformProfile;

/// Fixed name of the auto-generated placeholder file.
pub const PLACEHOLDER_FILE_NAME: &str = "auto_generated.tf";

/// Fixed, platform-specific name of the coverage report.
pub fn report_file_name(platform: Platform) -> String {
    format!("refine_summary_{}.log", platform.id())
}

/// Render the placeholder file for the missing categories.
///
/// Blocks follow the profile's enumeration order, separated by a blank line,
/// behind a warning banner. A missing category without a template gets a
/// visible marker instead of silence.
pub fn render_placeholder(profile: &PlatformProfile, missing: &BTreeSet<&'static str>) -> String {
    let blocks: Vec<String> = profile
        .categories
        .iter()
        .filter(|spec| missing.contains(spec.name))
        .map(|spec| match spec.template {
            Some(template) => template.trim().to_string(),
            None => format!("# WARNING: no template defined for {}", spec.name),
        })
        .collect();

    format!(
        "# ==============================================================\n\
         # Auto-generated blocks for missing components. Review required.\n\
         # ==============================================================\n\n{}\n",
        blocks.join("\n\n")
    )
}

/// Render the flat text coverage report.
pub fn render_report(platform: Platform, coverage: &CoverageResult) -> String {
    let sorted = |set: &BTreeSet<&'static str>| -> String {
        let names: Vec<&str> = set.iter().copied().collect();
        format!("{names:?}")
    };

    format!(
        "==== {} refinement summary ====\n\n\
         Expected components from the solution narrative: {}\n\n\
         Components found in the existing .tf files: {}\n\n\
         Missing components (written to {}): {}\n\n\
         Extra components (present but not expected): {}\n\n\
         No pre-existing .tf file was modified.\n",
        platform.label(),
        sorted(&coverage.expected),
        sorted(&coverage.present),
        PLACEHOLDER_FILE_NAME,
        sorted(&coverage.missing),
        sorted(&coverage.extra),
    )
}
