use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a redub run. The first one aborts the whole walk.
#[derive(Debug, Error)]
pub enum RedubError {
    #[error("Cannot open directory {path:?}")]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rewrite contents of {path:?}")]
    ContentIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {from:?} to {to:?}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RedubError>;
