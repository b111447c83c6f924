//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal UI owns stdout and stderr while it runs, so log lines go to
//! a file when one is configured and are discarded otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber. `filter` uses `EnvFilter` syntax,
/// e.g. `info` or `paperdesk::domain=debug`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the filter does not
/// parse, or a subscriber is already installed.
pub fn init_logging(filter: &str, log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(filter, Mutex::new(file))
        }
        None => init_logging_with_writer(filter, io::sink),
    }
}

pub fn init_logging_with_writer<W>(filter: &str, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let err = init_logging_with_writer("paperdesk=loud", io::sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
