//! Domain entities and ports.
//!
//! Public surface:
//! - `User`, `UserId`: the author entity and its key.
//! - `Message`, `MessageId`: the message entity, its key, and the checked
//!   creator relation.
//! - `ports::UserLookup`: resolves a `UserId` for `Message::resolve_creator`.

pub mod message;
pub mod ports;
pub mod user;

pub use self::message::{CreatorResolutionError, Message, MessageId, MessageRelationError};
pub use self::user::{User, UserId};
