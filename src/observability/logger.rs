//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries only the report table.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Log verbosity selected by `-quiet` / `-debug`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// No log output; fatal errors still reach stderr via the CLI
    Quiet,
    /// Progress and per-record warnings
    Normal,
    /// Adds one line per predicate evaluation
    Debug,
}

impl Verbosity {
    /// Resolves verbosity from the two flags. `debug` wins over `quiet`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    /// Maximum level emitted at this verbosity
    pub fn level(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Builds the filter for a verbosity.
///
/// `RUST_LOG` refines the default directives, except in quiet mode which
/// always silences everything.
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    if verbosity == Verbosity::Quiet {
        return EnvFilter::new("off");
    }
    EnvFilter::builder()
        .with_default_directive(verbosity.level().into())
        .from_env_lossy()
}

/// Install the global stderr subscriber. Safe to call more than once; only
/// the first call takes effect.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
