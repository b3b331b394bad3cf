use std::path::PathBuf;

use thiserror::Error;

/// Rejections of a directory command. Each one is detected before the
/// participant list is touched, so a failed command has no side effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed contains an activity with an empty name")]
    EmptyName,
    #[error("activity {0:?} has a capacity of zero")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
