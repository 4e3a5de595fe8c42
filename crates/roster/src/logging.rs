//! Logging configuration for roster.
//!
//! Log lines go to stderr; stdout carries only the rendered gallery and
//! detail views. The HTTP client stack is held at `warn` unless `RUST_LOG`
//! asks for more, so `-vv` traces roster's own events without connection
//! pool chatter.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates below roster that are only interesting when something breaks.
const QUIET_DEPENDENCIES: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls"];

/// How much roster itself logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Warnings, such as a failed reload.
    #[default]
    Normal,
    /// Load progress and session transitions (`-v`).
    Verbose,
    /// Per-event traces, including filter passes (`-vv`).
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from the `-q` flag and the number of `-v` flags.
    ///
    /// `-q` wins over any number of `-v`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The tracing level for roster's own targets.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directives used when `RUST_LOG` is unset.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = format!("roster={}", self.to_level_filter());
        for target in QUIET_DEPENDENCIES {
            directives.push_str(&format!(",{target}=warn"));
        }
        directives
    }
}

/// Install the global subscriber.
///
/// Call once at startup. `RUST_LOG`, when set, replaces the directives
/// derived from `verbosity`. Later calls are ignored.
///
/// ```no_run
/// use roster::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Capture roster's debug events in test output.
///
/// The test harness only shows them for failing tests.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(Verbosity::Verbose.directives())
        .with_test_writer()
        .try_init();
}
