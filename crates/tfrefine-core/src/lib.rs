//! tfrefine Core Library
//!
//! Re-exports core components for programmatic access to the refinement
//! pipeline: fenced-block extraction, structural validation, artifact
//! persistence, and narrative-vs-directory coverage auditing.

pub mod artifacts;
pub mod audit;
pub mod domain;
pub mod extract;
pub mod profile;
pub mod report;
pub mod telemetry;
pub mod validate;

pub use artifacts::{write_artifacts, ArtifactOutcome, RejectedBlock};
pub use audit::{compute_coverage, run_audit, AuditOutcome, CoverageResult};
pub use domain::{Platform, RefineError, Result};
pub use extract::{extract_blocks, ExtractedBlock};
pub use profile::{profile_for, CategorySpec, PlatformProfile};
pub use report::{render_placeholder, render_report, report_file_name, PLACEHOLDER_FILE_NAME};
pub use telemetry::init_tracing;
pub use validate::{validate_block, BlockVerdict};
