//! Tracing setup for the `edprof` binary.
//!
//! Every event goes to stderr so command output on stdout stays pipeable.
//! Robot mode writes one JSON object per event; otherwise the formatter
//! depends on whether stderr is a terminal. Library code only emits events
//! and never installs a subscriber.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "edprof=error";
    }
    match verbose {
        0 => "edprof=warn",
        1 => "edprof=debug",
        _ => "edprof=trace",
    }
}

/// Formatter used for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    /// JSON lines, for agents.
    Json,
    /// Colored multi-field output on an interactive terminal.
    Terminal,
    /// Compact output without ANSI codes, for redirected stderr.
    Plain,
}

impl LogStyle {
    pub fn select(robot_mode: bool, stderr_is_terminal: bool) -> Self {
        match (robot_mode, stderr_is_terminal) {
            (true, _) => Self::Json,
            (false, true) => Self::Terminal,
            (false, false) => Self::Plain,
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the directive derived from `verbose` and `quiet`.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));
    let style = LogStyle::select(robot_mode, io::stderr().is_terminal());

    // Exactly one of these is Some; a None layer is a no-op.
    let json = (style == LogStyle::Json).then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
    });
    let terminal = (style == LogStyle::Terminal).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });
    let plain = (style == LogStyle::Plain).then(|| {
        fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(terminal)
        .with(plain)
        .init();
}
