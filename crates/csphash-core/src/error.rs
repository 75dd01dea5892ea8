/// Errors that can occur while computing or formatting a digest.
#[derive(Debug, thiserror::Error)]
pub enum CspHashError {
    /// The target could not be opened for reading, or is not a regular file.
    #[error("file unavailable: {path}: {reason}")]
    FileUnavailable { path: String, reason: String },

    /// An I/O error occurred after the file was opened.
    #[error("read failure: {path}: {reason}")]
    ReadFailure { path: String, reason: String },

    #[error("malformed digest: expected 64 hex characters, got {0:?}")]
    MalformedDigest(String),

    #[error("invalid chunk size: {0} (must be between 1 and 67108864 bytes)")]
    InvalidChunkSize(usize),
}

impl CspHashError {
    pub fn file_unavailable(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub fn read_failure(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
