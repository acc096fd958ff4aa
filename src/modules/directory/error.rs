use thiserror::Error;

/// Why a directory operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("conflict: username '{username}' is already taken")]
    UsernameTaken { username: String },
}

impl DirectoryError {
    pub(crate) fn taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::UsernameTaken { .. } => "conflict",
        }
    }
}
