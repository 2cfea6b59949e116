//! Best-effort lint pass via the external `terraform` CLI.
//!
//! A boundary collaborator, not part of the refinement core: files are
//! persisted whether or not the lint pass runs, and every failure mode here
//! degrades to a warning at the call site. Nothing in this crate edits the
//! directory under check — `terraform init`/`validate` only reads the
//! configuration (apart from its own `.terraform` state dir).

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, warn};

/// Default ceiling for one `init` + `validate` pass.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Result of one `terraform init` + `terraform validate` pass.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Whether `terraform init -input=false` exited 0.
    pub init_ok: bool,
    /// Whether `terraform validate` exited 0.
    pub validate_ok: bool,
    /// Captured stderr from the failing step, empty on success.
    pub stderr: String,
    /// Wall time of the whole pass in milliseconds.
    pub duration_ms: u64,
}

impl LintResult {
    /// Whether the directory passed both steps.
    pub fn passed(&self) -> bool {
        self.init_ok && self.validate_ok
    }
}

/// Probe for the `terraform` binary on the host.
///
/// Any failure to spawn or a non-zero exit counts as "not available".
pub fn terraform_available() -> bool {
    std::process::Command::new("terraform")
        .arg("version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `terraform init` then `terraform validate` against `dir`.
///
/// # Errors
///
/// Returns an error when the binary cannot be spawned or the pass exceeds
/// `timeout`. Callers treat any error as a warning — lint never gates
/// persistence.
pub async fn validate_directory(dir: &Path, timeout: Duration) -> anyhow::Result<LintResult> {
    let start = Instant::now();

    let init = run_step(dir, &["init", "-input=false"], timeout).await?;
    let init_ok = init.success;
    if !init_ok {
        debug!(dir = %dir.display(), "terraform init failed");
        return Ok(LintResult {
            init_ok,
            validate_ok: false,
            stderr: init.stderr,
            duration_ms: start.elapsed().as_millis() as u64,
        });
    }

    let validate = run_step(dir, &["validate"], timeout).await?;
    if !validate.success {
        warn!(dir = %dir.display(), "terraform validate reported problems");
    }

    Ok(LintResult {
        init_ok,
        validate_ok: validate.success,
        stderr: validate.stderr,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

struct StepOutput {
    success: bool,
    stderr: String,
}

async fn run_step(dir: &Path, args: &[&str], timeout: Duration) -> anyhow::Result<StepOutput> {
    let child = Command::new("terraform")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| {
            anyhow::anyhow!(
                "terraform {} timed out after {} seconds",
                args.join(" "),
                timeout.as_secs()
            )
        })??;

    Ok(StepOutput {
        success: output.status.success(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
