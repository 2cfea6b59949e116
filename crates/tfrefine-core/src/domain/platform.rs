//! Target cloud platform selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RefineError;

/// One of the three cloud platforms the refiner knows how to audit.
///
/// The platform selects the resource vocabulary, the detection regexes, the
/// provider keyword checked by the block validator, and the placeholder
/// templates. All three emit plain Terraform, so the configuration file
/// extension is `tf` across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Aws,
    Azure,
    Gcp,
}

impl Platform {
    /// Lower-case identifier, used in filenames and log lines.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Aws => "aws",
            Platform::Azure => "azure",
            Platform::Gcp => "gcp",
        }
    }

    /// Display label for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Aws => "AWS",
            Platform::Azure => "Azure",
            Platform::Gcp => "GCP",
        }
    }

    /// Regex matched (case-insensitively) against block content to confirm a
    /// provider declaration for this platform.
    pub fn provider_pattern(&self) -> &'static str {
        match self {
            Platform::Aws => r#"provider\s+"aws""#,
            Platform::Azure => r#"provider\s+"azurerm""#,
            Platform::Gcp => r#"provider\s+"google""#,
        }
    }

    /// Configuration file extension scanned by the auditor.
    pub fn extension(&self) -> &'static str {
        "tf"
    }

    /// All supported platforms, in canonical order.
    pub fn all() -> [Platform; 3] {
        [Platform::Aws, Platform::Azure, Platform::Gcp]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = RefineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Platform::Aws),
            "azure" => Ok(Platform::Azure),
            "gcp" => Ok(Platform::Gcp),
            other => Err(RefineError::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("AWS".parse::<Platform>().unwrap(), Platform::Aws);
        assert_eq!("Azure".parse::<Platform>().unwrap(), Platform::Azure);
        assert_eq!("gcp".parse::<Platform>().unwrap(), Platform::Gcp);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "oci".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("oci"));
    }

    #[test]
    fn test_id_round_trips() {
        for p in Platform::all() {
            assert_eq!(p.id().parse::<Platform>().unwrap(), p);
        }
    }
}
