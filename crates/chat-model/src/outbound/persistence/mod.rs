//! Relational mapping of the model using Diesel.
//!
//! This module carries the metadata an external persistence layer needs to
//! store users and messages in PostgreSQL. It never opens a connection.
//!
//! - `schema`: `table!` declarations, the `messages -> users` join, and the
//!   primary keys of both tables.
//! - `models`: row structs whose derives name the keys and the `belongs_to`
//!   association, plus conversions to and from the domain entities.
//! - `relations`: in-memory creator resolution over loaded rows.
//!
//! # Example
//!
//! ```ignore
//! use chat_model::outbound::persistence::{MessageRow, UserRow, schema};
//! use diesel::prelude::*;
//!
//! let rows: Vec<(MessageRow, UserRow)> = schema::messages::table
//!     .inner_join(schema::users::table)
//!     .select((MessageRow::as_select(), UserRow::as_select()))
//!     .load(&mut connection)?;
//! ```

mod models;
mod relations;
pub mod schema;

pub use models::{MessageRow, MessageUpdate, NewMessageRow, NewUserRow, UserRow, UserUpdate};
pub use relations::{attach_creators, group_messages_by_user};
