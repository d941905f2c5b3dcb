use std::path::PathBuf;

/// Failures surfaced by the timeline core and its shell.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// Snapshot bytes are not a well-formed timeline export.
    #[error("snapshot is not a valid timeline export: {0}")]
    Format(String),

    /// Snapshot file could not be opened or read. Import treats this as "no
    /// file chosen".
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Test run data set does not have the expected shape.
    #[error("invalid test run data in {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TimelineError {
    pub fn is_format(&self) -> bool {
        matches!(self, TimelineError::Format(_))
    }
}
