use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Permission denied running `{command}`: {stderr}")]
    PermissionDenied { command: String, stderr: String },

    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("`{command}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Could not start `{program}`: {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Nothing to paste, copy or cut an entry first")]
    ClipboardEmpty,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ExplorerError {
    /// True for failures caused by the device refusing access.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ExplorerError::PermissionDenied { .. })
    }
}

impl From<String> for ExplorerError {
    fn from(s: String) -> Self {
        ExplorerError::Other(s)
    }
}

impl From<&str> for ExplorerError {
    fn from(s: &str) -> Self {
        ExplorerError::Other(s.to_string())
    }
}
