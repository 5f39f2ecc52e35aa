//! Observability utilities for Prompt Lab binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once to
//! install a formatting subscriber.

#![warn(missing_docs, clippy::pedantic)]

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps a repeated `-v` count to a default log level.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(level_for_verbosity(verbosity).to_string().to_lowercase())
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
