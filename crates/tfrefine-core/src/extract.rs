//! Fenced Terraform block extraction from model output.
//!
//! Purely syntactic: finds non-overlapping ```` ```terraform … ``` ````
//! regions and captures the interior verbatim. Unterminated fences have no
//! closing delimiter to match, so they yield no block.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::domain::Platform;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"```terraform(.*?)```")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("fence pattern is valid")
});

pub(crate) static RESOURCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"resource\s+"([^"]+)"\s+"([^"]+)""#).expect("resource pattern is valid")
});

/// One configuration block captured from a fenced code region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    /// Interior of the fence, surrounding whitespace trimmed.
    pub content: String,
    /// `<platform>_<resource-type>` from the first resource declaration,
    /// or `<platform>_resource` when the block declares none.
    pub suggested_name: String,
}

/// Extract all fenced Terraform blocks from a model response, in document
/// order. Repeated calls over the same input return the same sequence.
pub fn extract_blocks(model_output: &str, platform: Platform) -> Vec<ExtractedBlock> {
    let mut blocks = Vec::new();
    for caps in FENCE_RE.captures_iter(model_output) {
        let content = caps[1].trim().to_string();
        let suggested_name = match RESOURCE_RE.captures(&content) {
            Some(resource) => format!("{}_{}", platform.id(), &resource[1]),
            None => format!("{}_resource", platform.id()),
        };
        blocks.push(ExtractedBlock {
            content,
            suggested_name,
        });
    }
    debug!(count = blocks.len(), platform = %platform, "extracted terraform blocks");
    blocks
}
