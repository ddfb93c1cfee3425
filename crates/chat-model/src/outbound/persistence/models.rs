//! Diesel row structs for the `users` and `messages` tables.
//!
//! The derives carry the mapping metadata: `Identifiable` names each primary
//! key and `Associations` declares `messages.user_id` as the foreign key to
//! `users`. Conversions to and from the domain entities live here so the
//! domain never sees a row type.

use diesel::prelude::*;

use crate::domain::{Message, MessageId, User, UserId};

use super::schema::{messages, users};

/// Row read from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Primary key.
    pub user_id: i32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// Insertable form of a user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    /// Primary key.
    pub user_id: i32,
    /// Display name.
    pub name: &'a str,
    /// Contact address.
    pub email: &'a str,
}

/// Changeset for the mutable user columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserUpdate<'a> {
    /// Display name.
    pub name: &'a str,
    /// Contact address.
    pub email: &'a str,
}

/// Row read from the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = messages)]
#[diesel(primary_key(message_id))]
#[diesel(belongs_to(UserRow, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Primary key.
    pub message_id: i32,
    /// Message body.
    pub content: String,
    /// Foreign key to `users.user_id`.
    pub user_id: i32,
}

/// Insertable form of a message.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow<'a> {
    /// Primary key.
    pub message_id: i32,
    /// Message body.
    pub content: &'a str,
    /// Foreign key to `users.user_id`.
    pub user_id: i32,
}

/// Changeset for the mutable message columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = messages)]
pub struct MessageUpdate<'a> {
    /// Message body.
    pub content: &'a str,
    /// Foreign key to `users.user_id`.
    pub user_id: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::new(row.user_id), row.name, row.email)
    }
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            user_id: user.id().get(),
            name: user.name(),
            email: user.email(),
        }
    }
}

impl<'a> From<&'a User> for UserUpdate<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.name(),
            email: user.email(),
        }
    }
}

/// The resulting message has no creator loaded.
impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self::new(
            MessageId::new(row.message_id),
            row.content,
            UserId::new(row.user_id),
        )
    }
}

impl<'a> From<&'a Message> for NewMessageRow<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            message_id: message.id().get(),
            content: message.content(),
            user_id: message.user_id().get(),
        }
    }
}

impl<'a> From<&'a Message> for MessageUpdate<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            content: message.content(),
            user_id: message.user_id().get(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Row <-> domain conversions and the query shapes the derives enable.

    use diesel::debug_query;
    use diesel::pg::Pg;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn alice_row() -> UserRow {
        UserRow {
            user_id: 1,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }
    }

    #[rstest]
    fn user_row_converts_to_user(alice_row: UserRow) {
        let user = User::from(alice_row);

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@example.com");
    }

    #[rstest]
    fn user_converts_to_insertable_and_changeset() {
        let user = User::new(UserId::new(3), "Carol", "carol@example.com");

        let new_row = NewUserRow::from(&user);
        let update = UserUpdate::from(&user);

        assert_eq!(new_row.user_id, 3);
        assert_eq!(new_row.name, "Carol");
        assert_eq!(new_row.email, "carol@example.com");
        assert_eq!(update.name, "Carol");
        assert_eq!(update.email, "carol@example.com");
    }

    #[rstest]
    fn message_row_converts_without_creator() {
        let row = MessageRow {
            message_id: 100,
            content: "hello".to_owned(),
            user_id: 1,
        };

        let message = Message::from(row);

        assert_eq!(message.id(), MessageId::new(100));
        assert_eq!(message.content(), "hello");
        assert_eq!(message.user_id(), UserId::new(1));
        assert!(!message.is_creator_loaded());
    }

    #[rstest]
    fn message_converts_to_insertable_and_changeset() {
        let message = Message::new(MessageId::new(100), "hello", UserId::new(1));

        let new_row = NewMessageRow::from(&message);
        let update = MessageUpdate::from(&message);

        assert_eq!(new_row.message_id, 100);
        assert_eq!(new_row.content, "hello");
        assert_eq!(new_row.user_id, 1);
        assert_eq!(update.content, "hello");
        assert_eq!(update.user_id, 1);
    }

    #[rstest]
    fn identifiable_uses_declared_primary_keys(alice_row: UserRow) {
        let message_row = MessageRow {
            message_id: 100,
            content: "hello".to_owned(),
            user_id: 1,
        };

        assert_eq!((&alice_row).id(), &1);
        assert_eq!((&message_row).id(), &100);
    }

    #[rstest]
    fn belonging_to_filters_on_foreign_key(alice_row: UserRow) {
        let query = MessageRow::belonging_to(&alice_row).select(MessageRow::as_select());
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains(r#"FROM "messages""#), "unexpected SQL: {sql}");
        assert!(sql.contains(r#""messages"."user_id" = $1"#), "unexpected SQL: {sql}");
        assert!(sql.contains("binds: [1]"), "unexpected SQL: {sql}");
    }

    #[rstest]
    fn messages_join_users_on_foreign_key() {
        let query = messages::table
            .inner_join(users::table)
            .select((MessageRow::as_select(), UserRow::as_select()));
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(
            sql.contains(r#""messages"."user_id" = "users"."user_id""#),
            "unexpected SQL: {sql}"
        );
    }
}
