//! Crate-wide error type, built on snafu.

use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    /// A platform base directory could not be resolved
    #[snafu(display("Could not determine {what}"))]
    MissingDirectory { what: &'static str },

    /// Filesystem failure outside the export path
    #[snafu(display("Filesystem error: {source}"))]
    Io { source: std::io::Error },

    /// Preference encode/decode failure
    #[snafu(display("JSON encode/decode error: {source}"))]
    Json { source: serde_json::Error },

    /// A simulation report could not be written
    #[snafu(display("Export failed for {}: {source}", path.display()))]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
