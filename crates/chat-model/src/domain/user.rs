//! User entity.

use std::fmt;

/// Primary identity key of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw integer key.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw integer key.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who writes messages.
///
/// `name` and `email` are free text. Two users may share either value; any
/// uniqueness or format rule belongs to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from its three fields.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Primary identity key.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replace the identity key.
    pub const fn set_id(&mut self, id: UserId) {
        self.id = id;
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the contact address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}
