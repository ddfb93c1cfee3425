//! Message entity and its creator relation.
//!
//! A message references its author by [`UserId`]. The `creator` field is a
//! cached copy of that user, filled on demand through a [`UserLookup`]. The
//! foreign key stays the source of truth: a cached creator is only accepted
//! when its id matches, and is discarded when the key moves.

use std::fmt;

use tracing::debug;

use crate::domain::ports::{UserLookup, UserLookupError};
use crate::domain::{User, UserId};

/// Primary identity key of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(i32);

impl MessageId {
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

impl From<i32> for MessageId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<MessageId> for i32 {
    fn from(value: MessageId) -> Self {
        value.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a creator does not match the message's foreign key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRelationError {
    /// The candidate creator carries a different key.
    #[error("creator {creator_user_id} does not match message user id {message_user_id}")]
    CreatorMismatch {
        /// Foreign key stored on the message.
        message_user_id: UserId,
        /// Key of the rejected user.
        creator_user_id: UserId,
    },
}

/// Failures from [`Message::resolve_creator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatorResolutionError {
    /// The lookup port failed.
    #[error(transparent)]
    Lookup(#[from] UserLookupError),
    /// The lookup answered with a user for another key.
    #[error(transparent)]
    Relation(#[from] MessageRelationError),
}

/// A piece of text written by a user.
///
/// ## Invariants
/// - When `creator` is present, `creator.id() == user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    content: String,
    user_id: UserId,
    creator: Option<User>,
}

impl Message {
    /// Build a message referencing `user_id`, with no creator loaded.
    pub fn new(id: MessageId, content: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id,
            content: content.into(),
            user_id,
            creator: None,
        }
    }

    /// Build a message whose foreign key is taken from `creator`.
    pub fn with_creator(id: MessageId, content: impl Into<String>, creator: User) -> Self {
        Self {
            id,
            content: content.into(),
            user_id: creator.id(),
            creator: Some(creator),
        }
    }

    /// Primary identity key.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Message body.
    #[must_use]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Key of the user who wrote the message.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The cached creator, if one has been loaded.
    #[must_use]
    pub const fn creator(&self) -> Option<&User> {
        self.creator.as_ref()
    }

    /// Whether a creator is cached.
    #[must_use]
    pub const fn is_creator_loaded(&self) -> bool {
        self.creator.is_some()
    }

    /// Replace the identity key.
    pub const fn set_id(&mut self, id: MessageId) {
        self.id = id;
    }

    /// Replace the message body.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Point the message at another user.
    ///
    /// A cached creator for the previous key is dropped.
    pub fn set_user_id(&mut self, user_id: UserId) {
        if self.user_id == user_id {
            return;
        }
        if self.creator.take().is_some() {
            debug!(
                message_id = %self.id,
                previous_user_id = %self.user_id,
                user_id = %user_id,
                "dropped cached creator after foreign key change"
            );
        }
        self.user_id = user_id;
    }

    /// Cache `user` as the creator.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRelationError::CreatorMismatch`] when `user` carries a
    /// different key; the message is left untouched.
    pub fn attach_creator(&mut self, user: User) -> Result<(), MessageRelationError> {
        if user.id() != self.user_id {
            return Err(MessageRelationError::CreatorMismatch {
                message_user_id: self.user_id,
                creator_user_id: user.id(),
            });
        }
        self.creator = Some(user);
        Ok(())
    }

    /// Remove and return the cached creator.
    pub const fn detach_creator(&mut self) -> Option<User> {
        self.creator.take()
    }

    /// Return the creator, loading it through `lookup` when not cached.
    ///
    /// A missing user leaves the creator empty and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CreatorResolutionError::Lookup`] when the port fails and
    /// [`CreatorResolutionError::Relation`] when it answers with a user for a
    /// different key.
    pub async fn resolve_creator(
        &mut self,
        lookup: &dyn UserLookup,
    ) -> Result<Option<&User>, CreatorResolutionError> {
        if self.creator.is_none() {
            match lookup.find_user(self.user_id).await? {
                Some(user) => self.attach_creator(user)?,
                None => debug!(
                    message_id = %self.id,
                    user_id = %self.user_id,
                    "creator not found"
                ),
            }
        }
        Ok(self.creator.as_ref())
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
