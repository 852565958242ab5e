//! Diagnostic logging to stderr.
//!
//! stdout carries command output, so log lines never go there. `RUST_LOG`
//! wins when set; otherwise the level comes from `--verbose`.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "interns=debug" } else { "warn" }
}

/// Install the global subscriber. Failure (e.g. one is already installed)
/// is reported on stderr and otherwise ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: logging init failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(true), "interns=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
