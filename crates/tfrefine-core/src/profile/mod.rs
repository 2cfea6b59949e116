//! Per-platform resource vocabularies, detection rules, and templates.
//!
//! One [`PlatformProfile`] exists per cloud platform. The audit algorithm is
//! written once and parameterized over these records; the profiles differ
//! only in data. Categories are matched two ways:
//!
//! - *Narrative rule*: lower-cased substring containment of the category
//!   name in the solution narrative. Deliberately unanchored — short names
//!   can match inside longer words, which mirrors the permissive behavior
//!   the report consumers already expect.
//! - *Config rule*: `config_pattern` compiled as a case-insensitive regex
//!   against configuration file contents. A category without a config rule
//!   can be expected but never found on disk.

mod aws;
mod azure;
mod gcp;

use regex::RegexBuilder;
use tracing::warn;

use crate::domain::Platform;

/// A resource category plus its detection rule and placeholder template.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Display name; its lower-cased form is the narrative rule.
    pub name: &'static str,
    /// Regex matched case-insensitively against `.tf` file contents.
    pub config_pattern: Option<&'static str>,
    /// Placeholder block emitted when the category is missing.
    pub template: Option<&'static str>,
}

/// The full vocabulary and rule set for one platform.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Categories in enumeration order; placeholder output follows this order.
    pub categories: &'static [CategorySpec],
}

impl PlatformProfile {
    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&'static CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Narrative rule: does the lower-cased text mention this category?
    ///
    /// `text_lower` must already be lower-cased by the caller; categories are
    /// lowered here so a single pass over the narrative suffices.
    pub fn narrative_mentions(&self, text_lower: &str, spec: &CategorySpec) -> bool {
        text_lower.contains(&spec.name.to_lowercase())
    }

    /// Config rule: does the file content declare this category's resource?
    ///
    /// Categories without a config pattern never match. A pattern that fails
    /// to compile is skipped with a warning; the static tables are covered by
    /// tests, so this only fires on a bad table edit.
    pub fn config_matches(&self, content: &str, spec: &CategorySpec) -> bool {
        let Some(pattern) = spec.config_pattern else {
            return false;
        };
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => re.is_match(content),
            Err(e) => {
                warn!(category = spec.name, error = %e, "invalid config pattern, skipping");
                false
            }
        }
    }
}

/// The static profile for a platform.
pub fn profile_for(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::Aws => &aws::PROFILE,
        Platform::Azure => &azure::PROFILE,
        Platform::Gcp => &gcp::PROFILE,
    }
}
