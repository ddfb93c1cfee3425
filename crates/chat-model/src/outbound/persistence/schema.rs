//! Diesel table definitions for the relational layout of the model.
//!
//! The collaborator that owns the database must create tables matching
//! these declarations; `diesel print-schema` against that database should
//! reproduce them.

diesel::table! {
    /// Users who write messages.
    ///
    /// `user_id` is the primary key.
    users (user_id) {
        /// Primary key.
        user_id -> Int4,
        /// Display name, unconstrained.
        name -> Text,
        /// Contact address, unconstrained.
        email -> Text,
    }
}

diesel::table! {
    /// Messages written by users.
    ///
    /// `message_id` is the primary key; `user_id` references `users.user_id`.
    messages (message_id) {
        /// Primary key.
        message_id -> Int4,
        /// Message body.
        content -> Text,
        /// Foreign key to `users.user_id`.
        user_id -> Int4,
    }
}

diesel::joinable!(messages -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(messages, users);
