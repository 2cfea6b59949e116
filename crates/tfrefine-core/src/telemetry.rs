//! Centralised tracing initialisation for tfrefine binaries.
//!
//! Call [`init_tracing`] once at program start to configure the global
//! subscriber with an `EnvFilter` and optional JSON formatting.
//!
//! Safe to call more than once — subsequent calls are silently ignored
//! (the global subscriber can only be set once per process).

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Targets covered by the default filter when `RUST_LOG` is unset:
/// the workspace crates plus the `tfrefine` binary itself. Dependency
/// noise (tokio, regex internals) stays off unless asked for explicitly.
const CRATE_TARGETS: &[&str] = &["tfrefine_core", "tfrefine_lint", "tfrefine_cli", "tfrefine"];

fn default_filter(level: Level) -> EnvFilter {
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Initialise the global tracing subscriber.
///
/// * `json` — when `true`, emit newline-delimited JSON log lines.
/// * `level` — verbosity applied to the tfrefine crates when `RUST_LOG`
///   is not set.
///
/// A set `RUST_LOG` environment variable takes precedence over `level`.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_to_workspace_crates() {
        let rendered = default_filter(Level::DEBUG).to_string();
        for target in CRATE_TARGETS {
            assert!(rendered.contains(target), "missing directive for {target}");
        }
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(false, Level::INFO);
        init_tracing(true, Level::DEBUG);
    }
}
