//! Persistence of extracted Terraform blocks.
//!
//! Valid blocks land as `<suggested_name>_<idx>.tf` where `idx` is the
//! block's 1-based position in the extracted sequence — two blocks that
//! infer the same name still get distinct filenames. Invalid blocks are
//! never written; their issues travel back in the outcome.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{Platform, Result};
use crate::extract::ExtractedBlock;
use crate::validate::validate_block;

/// A block that failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedBlock {
    pub suggested_name: String,
    pub issues: Vec<String>,
}

/// Result of persisting one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ArtifactOutcome {
    /// Files written, in block order.
    pub written: Vec<PathBuf>,
    /// Blocks skipped, with their validation issues.
    pub rejected: Vec<RejectedBlock>,
}

/// Validate each block and write the valid ones into `out_dir`.
///
/// One bad block does not abort the batch. I/O failures do.
pub fn write_artifacts(
    blocks: &[ExtractedBlock],
    out_dir: &Path,
    platform: Platform,
) -> Result<ArtifactOutcome> {
    fs::create_dir_all(out_dir)?;

    let mut outcome = ArtifactOutcome::default();
    for (idx, block) in blocks.iter().enumerate() {
        let verdict = validate_block(&block.content, platform);
        if !verdict.passed() {
            warn!(
                name = %block.suggested_name,
                issues = ?verdict.issues,
                "rejecting invalid terraform block"
            );
            outcome.rejected.push(RejectedBlock {
                suggested_name: block.suggested_name.clone(),
                issues: verdict.issues,
            });
            continue;
        }

        let filename = format!("{}_{}.{}", block.suggested_name, idx + 1, platform.extension());
        let path = out_dir.join(filename);
        fs::write(&path, &block.content)?;
        info!(path = %path.display(), "terraform block saved");
        outcome.written.push(path);
    }

    Ok(outcome)
}
