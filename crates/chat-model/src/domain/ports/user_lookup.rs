//! Port for resolving a user by key, used to populate `Message::creator`.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Errors raised by [`UserLookup`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserLookupError {
    /// The backing store could not be reached.
    #[error("user lookup connection failed: {message}")]
    Connection {
        /// Adapter-supplied detail.
        message: String,
    },
    /// The lookup query failed while executing.
    #[error("user lookup query failed: {message}")]
    Query {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl UserLookupError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Resolve a [`UserId`] to the stored [`User`].
///
/// Implementations return `Ok(None)` when no user carries the key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch the user whose primary key equals `id`.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, UserLookupError>;
}

/// In-memory lookup keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserLookup {
    users: BTreeMap<UserId, User>,
}

impl FixtureUserLookup {
    /// Build a lookup holding the given users. Later duplicates win.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut lookup = Self::default();
        for user in users {
            lookup.insert(user);
        }
        lookup
    }

    /// Store `user` under its id, returning any user it replaced.
    pub fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id(), user)
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the lookup holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserLookup for FixtureUserLookup {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, UserLookupError> {
        Ok(self.users.get(&id).cloned())
    }
}
