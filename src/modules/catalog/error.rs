use thiserror::Error;

/// Why a catalog operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("conflict: '{title}' is already in the catalog")]
    DuplicateBook { title: String },

    #[error("not found: '{title}' is not in the catalog")]
    BookNotFound { title: String },

    #[error("forbidden: '{title}' has not been purchased by this user")]
    NotPurchased { title: String },
}

impl CatalogError {
    pub(crate) fn duplicate(title: impl Into<String>) -> Self {
        Self::DuplicateBook {
            title: title.into(),
        }
    }

    pub(crate) fn not_found(title: impl Into<String>) -> Self {
        Self::BookNotFound {
            title: title.into(),
        }
    }

    pub(crate) fn not_purchased(title: impl Into<String>) -> Self {
        Self::NotPurchased {
            title: title.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateBook { .. } => "conflict",
            CatalogError::BookNotFound { .. } => "not_found",
            CatalogError::NotPurchased { .. } => "forbidden",
        }
    }
}
