//! Domain-level error taxonomy for tfrefine.

use std::path::PathBuf;

/// tfrefine domain errors.
///
/// Per-item failures (an invalid extracted block, a category without a
/// template) are not errors — they are carried in outcome values so the
/// batch keeps going. This enum covers whole-invocation failures only.
#[derive(Debug, thiserror::Error)]
pub enum RefineError {
    #[error("no configuration files found in {dir}")]
    NoConfigFiles { dir: PathBuf },

    #[error("unsupported platform: {0} (expected aws, azure, or gcp)")]
    UnsupportedPlatform(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tfrefine domain operations.
pub type Result<T> = std::result::Result<T, RefineError>;
