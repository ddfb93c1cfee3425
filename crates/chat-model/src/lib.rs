//! Chat data model: users, the messages they author, and the relational
//! mapping between them.
//!
//! - [`domain`] holds the entities, the creator invariant, and the
//!   [`domain::ports::UserLookup`] port used to resolve a message's creator.
//! - [`outbound::persistence`] maps both entities onto the `users` and
//!   `messages` tables with Diesel.

pub mod domain;
pub mod outbound;
