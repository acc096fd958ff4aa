use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::modules::catalog::models::{Book, Purchaser};

/// A registered account and its purchase history.
///
/// Purchases are only recorded through the catalog, so a `User` cannot be
/// assembled with a pre-filled history:
///
/// ```compile_fail
/// use shelf_app::User;
///
/// let user = User {
///     username: "reader".to_string(),
///     password: "secret".to_string(),
///     email: "reader@example.com".to_string(),
///     purchased_books: Vec::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub(crate) purchased_books: Vec<Book>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            purchased_books: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn purchased_books(&self) -> &[Book] {
        &self.purchased_books
    }
}

/// Shared handle to a single `User` record.
///
/// Clones point at the same record, so profile updates made through the
/// directory are visible to every holder.
#[derive(Debug, Clone)]
pub struct UserHandle(Arc<RwLock<User>>);

impl UserHandle {
    pub fn new(user: User) -> Self {
        Self(Arc::new(RwLock::new(user)))
    }

    /// True when both handles refer to the same record.
    pub fn ptr_eq(&self, other: &UserHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn username(&self) -> String {
        self.0.read().username.clone()
    }

    pub fn email(&self) -> String {
        self.0.read().email.clone()
    }

    /// Copy of the record as it is right now.
    pub fn snapshot(&self) -> User {
        self.0.read().clone()
    }

    pub(crate) fn has_username(&self, username: &str) -> bool {
        self.0.read().username == username
    }

    pub(crate) fn has_credentials(&self, username: &str, password: &str) -> bool {
        let user = self.0.read();
        user.username == username && user.password == password
    }

    pub(crate) fn overwrite_profile(&self, username: &str, password: &str, email: &str) {
        let mut user = self.0.write();
        user.username = username.to_string();
        user.password = password.to_string();
        user.email = email.to_string();
    }
}

impl From<User> for UserHandle {
    fn from(user: User) -> Self {
        Self::new(user)
    }
}

impl Purchaser for UserHandle {
    fn purchased_books(&self) -> Vec<Book> {
        self.0.read().purchased_books.clone()
    }

    fn record_purchase(&self, book: Book) {
        self.0.write().purchased_books.push(book);
    }
}
