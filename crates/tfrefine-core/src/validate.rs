//! Structural sanity checks for extracted Terraform blocks.
//!
//! This is a filter, not semantic validation: it confirms a provider
//! declaration for the target platform and at least one resource
//! declaration, nothing more. The two checks are independent — an empty
//! block reports both issues.

use regex::RegexBuilder;
use tracing::warn;

use crate::domain::Platform;
use crate::extract::RESOURCE_RE;

/// Verdict for one block: valid when `issues` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockVerdict {
    /// Human-readable issue descriptions, in check order.
    pub issues: Vec<String>,
}

impl BlockVerdict {
    /// Whether the block passed every structural check.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate one block's content against the target platform.
pub fn validate_block(content: &str, platform: Platform) -> BlockVerdict {
    let mut issues = Vec::new();

    let provider_found = match RegexBuilder::new(platform.provider_pattern())
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.is_match(content),
        Err(e) => {
            warn!(platform = %platform, error = %e, "invalid provider pattern");
            false
        }
    };
    if !provider_found {
        issues.push(format!("missing provider block for '{}'", platform.id()));
    }

    if !RESOURCE_RE.is_match(content) {
        issues.push("missing resource block".to_string());
    }

    BlockVerdict { issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_reports_both_issues() {
        let verdict = validate_block("", Platform::Aws);
        assert!(!verdict.passed());
        assert_eq!(verdict.issues.len(), 2);
    }

    #[test]
    fn test_provider_check_is_case_insensitive() {
        let content = r#"PROVIDER "AWS" {}
resource "aws_vpc" "main" {}"#;
        assert!(validate_block(content, Platform::Aws).passed());
    }

    #[test]
    fn test_provider_must_match_platform() {
        let content = r#"provider "aws" {}
resource "aws_vpc" "main" {}"#;
        let verdict = validate_block(content, Platform::Azure);
        assert_eq!(verdict.issues.len(), 1);
        assert!(verdict.issues[0].contains("azure"));
    }
}
