//! Creator resolution over rows the collaborator has already loaded.
//!
//! Both helpers work purely in memory. Every returned message that carries
//! a creator was built with `Message::with_creator`, so its foreign key and
//! the creator's key agree.

use std::collections::BTreeMap;

use diesel::prelude::*;
use tracing::debug;

use crate::domain::{Message, MessageId, User};

use super::models::{MessageRow, UserRow};

/// Convert message rows to domain messages, attaching creators from `users`.
///
/// A message whose `user_id` has no matching row keeps an empty creator.
/// Input order is preserved.
#[must_use]
pub fn attach_creators(messages: Vec<MessageRow>, users: &[UserRow]) -> Vec<Message> {
    let users_by_id: BTreeMap<i32, &UserRow> =
        users.iter().map(|row| (row.user_id, row)).collect();

    messages
        .into_iter()
        .map(|row| match users_by_id.get(&row.user_id) {
            Some(user_row) => Message::with_creator(
                MessageId::new(row.message_id),
                row.content,
                User::from((*user_row).clone()),
            ),
            None => {
                debug!(
                    message_id = row.message_id,
                    user_id = row.user_id,
                    "no user row for message creator"
                );
                Message::from(row)
            }
        })
        .collect()
}

/// Group messages under their users using the `belongs_to` association.
///
/// The result has one entry per user row, in input order, each holding that
/// user's messages with the creator attached. Messages referencing a user
/// outside `users` are left out.
#[must_use]
pub fn group_messages_by_user(
    users: Vec<UserRow>,
    messages: Vec<MessageRow>,
) -> Vec<(User, Vec<Message>)> {
    let message_count = messages.len();
    let grouped = messages.grouped_by(&users);
    let grouped_count: usize = grouped.iter().map(Vec::len).sum();
    if grouped_count < message_count {
        debug!(
            omitted = message_count - grouped_count,
            "messages without a loaded user were left out"
        );
    }

    users
        .into_iter()
        .zip(grouped)
        .map(|(user_row, rows)| {
            let user = User::from(user_row);
            let user_messages = rows
                .into_iter()
                .map(|row| {
                    Message::with_creator(MessageId::new(row.message_id), row.content, user.clone())
                })
                .collect();
            (user, user_messages)
        })
        .collect()
}
