use super::error::DirectoryError;
use super::models::{User, UserHandle};

/// In-memory user registry, unique by username, in registration order.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<UserHandle>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Handles to every registered user.
    pub fn users(&self) -> Vec<UserHandle> {
        self.users.clone()
    }

    pub fn find_by_username(&self, username: &str) -> Option<UserHandle> {
        self.users
            .iter()
            .find(|user| user.has_username(username))
            .cloned()
    }

    /// Register a user and hand back the shared handle to its record.
    ///
    /// An empty username is an ordinary username and still has to be unique.
    pub fn register_user(
        &mut self,
        user: impl Into<UserHandle>,
    ) -> Result<UserHandle, DirectoryError> {
        let handle = user.into();
        let username = handle.username();

        if self.users.iter().any(|existing| existing.has_username(&username)) {
            tracing::debug!(%username, "rejecting duplicate registration");
            return Err(DirectoryError::taken(username));
        }

        tracing::info!(%username, "user registered");
        self.users.push(handle.clone());
        Ok(handle)
    }

    /// The registered user whose username and password both match exactly.
    pub fn login_user(&self, username: &str, password: &str) -> Option<UserHandle> {
        let found = self
            .users
            .iter()
            .find(|user| user.has_credentials(username, password))
            .cloned();

        match &found {
            Some(_) => tracing::info!(username, "login succeeded"),
            None => tracing::debug!(username, "login failed"),
        }
        found
    }

    /// Overwrite a user's profile in place.
    ///
    /// Fields are applied as given; `None` clears the field to an empty string.
    /// The only rejection is a `new_username` (empty included) already held by
    /// a different registered user, in which case nothing changes.
    pub fn update_user_profile(
        &mut self,
        user: &UserHandle,
        new_username: Option<&str>,
        new_password: Option<&str>,
        new_email: Option<&str>,
    ) -> Result<(), DirectoryError> {
        let username = new_username.unwrap_or_default();

        let conflict = self
            .users
            .iter()
            .any(|other| !other.ptr_eq(user) && other.has_username(username));
        if conflict {
            tracing::debug!(%username, "rejecting profile update, username taken");
            return Err(DirectoryError::taken(username));
        }

        let previous = user.username();
        user.overwrite_profile(
            username,
            new_password.unwrap_or_default(),
            new_email.unwrap_or_default(),
        );
        tracing::info!(%previous, %username, "user profile updated");
        Ok(())
    }
}

/// Registers each user in turn, skipping usernames that are already taken.
impl Extend<User> for Directory {
    fn extend<I: IntoIterator<Item = User>>(&mut self, users: I) {
        for user in users {
            if let Err(err) = self.register_user(user) {
                tracing::warn!(error = %err, "skipping user");
            }
        }
    }
}
