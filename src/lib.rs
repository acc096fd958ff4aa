//! shelf application library
//!
//! An in-memory book catalog (add, remove, search, purchase, review) and a
//! user directory (register, login, profile update), packaged as kernel
//! modules for embedding in a larger host.

pub mod modules;

/// Re-export commonly used types
pub use modules::catalog::{Book, Catalog, CatalogError, Price, Purchaser};
pub use modules::directory::{Directory, DirectoryError, User, UserHandle};
pub use modules::{register_all, Services};
