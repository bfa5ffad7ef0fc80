// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The messaging collaborator.
//!
//! Holds the conversations container and delivers messages between users.
//! The scheduling service uses it as a one-way hook for VIP notifications;
//! delivery is never awaited and never part of a scheduling call's
//! atomicity boundary.

use crate::error::CoreError;
use crate::user_directory::UserDirectory;
use atrium_domain::{Conversation, ConversationId, ConversationKind, UserId};
use chrono::NaiveDateTime;

/// Stores conversations in creation order.
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    conversations: Vec<Conversation>,
}

impl MessageBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a loaded conversations container.
    #[must_use]
    pub const fn from_conversations(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    /// Hands the conversations container back for persistence.
    #[must_use]
    pub fn into_conversations(self) -> Vec<Conversation> {
        self.conversations
    }

    /// Returns every conversation in creation order.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Returns the conversation with the given identifier, if present.
    #[must_use]
    pub fn get(&self, conversation_id: ConversationId) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|conversation| conversation.id() == conversation_id)
    }

    fn require_mut(
        &mut self,
        conversation_id: ConversationId,
    ) -> Result<&mut Conversation, CoreError> {
        self.conversations
            .iter_mut()
            .find(|conversation| conversation.id() == conversation_id)
            .ok_or(CoreError::ConversationNotFound(conversation_id))
    }

    /// Starts a conversation between a sender and recipients, delivers the
    /// first message, and wires the conversation into every participant's
    /// list, marking it unread for the recipients.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if any participant does not exist; nothing is
    /// created in that case.
    pub fn send_new(
        &mut self,
        users: &mut UserDirectory,
        kind: ConversationKind,
        sender: UserId,
        recipients: &[UserId],
        event_name: Option<String>,
        sent_at: NaiveDateTime,
        body: String,
    ) -> Result<ConversationId, CoreError> {
        users.require(sender)?;
        for recipient in recipients {
            users.require(*recipient)?;
        }

        let mut participants: Vec<UserId> = Vec::with_capacity(recipients.len() + 1);
        participants.push(sender);
        for recipient in recipients {
            if !participants.contains(recipient) {
                participants.push(*recipient);
            }
        }

        let mut conversation: Conversation =
            Conversation::new(kind, participants.clone(), event_name);
        let conversation_id: ConversationId = conversation.id();
        conversation.push_message(sender, sent_at, body);
        self.conversations.push(conversation);

        for participant in &participants {
            if let Ok(user) = users.require_mut(*participant) {
                user.add_conversation(conversation_id);
                if *participant != sender {
                    user.mark_conversation_unread(conversation_id);
                }
            }
        }
        Ok(conversation_id)
    }

    /// Appends a reply to an existing conversation and marks it unread for
    /// every other participant.
    ///
    /// # Errors
    ///
    /// Returns `ConversationNotFound` if the conversation does not exist.
    pub fn reply(
        &mut self,
        users: &mut UserDirectory,
        conversation_id: ConversationId,
        sender: UserId,
        sent_at: NaiveDateTime,
        body: String,
    ) -> Result<(), CoreError> {
        let conversation: &mut Conversation = self.require_mut(conversation_id)?;
        conversation.push_message(sender, sent_at, body);
        let participants: Vec<UserId> = conversation.participants();
        for participant in participants {
            if participant != sender
                && let Ok(user) = users.require_mut(participant)
            {
                user.mark_conversation_unread(conversation_id);
            }
        }
        Ok(())
    }

    /// Returns the number of conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns whether the board holds no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

/// Returns the current local wall-clock instant used to stamp messages.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
