// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{ConversationId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The origin of a conversation, which controls where it is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationKind {
    /// A direct conversation between users.
    Direct,
    /// A broadcast to the attendees of one event.
    Event,
    /// An organizer broadcast.
    Organizer,
}

/// One message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The sending user.
    pub sender: UserId,
    /// Local wall-clock send time.
    pub sent_at: NaiveDateTime,
    /// The message body.
    pub body: String,
}

/// An ordered exchange of messages between a fixed set of participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    kind: ConversationKind,
    /// Set for [`ConversationKind::Event`] conversations; the event's name
    /// at send time.
    event_name: Option<String>,
    participants: Vec<UserId>,
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates a new conversation with a fresh identifier and no messages.
    #[must_use]
    pub fn new(
        kind: ConversationKind,
        participants: Vec<UserId>,
        event_name: Option<String>,
    ) -> Self {
        Self {
            id: ConversationId::new(),
            kind,
            event_name,
            participants,
            messages: Vec::new(),
        }
    }

    /// Returns the conversation's identifier.
    #[must_use]
    pub const fn id(&self) -> ConversationId {
        self.id
    }

    /// Returns the conversation's kind.
    #[must_use]
    pub const fn kind(&self) -> ConversationKind {
        self.kind
    }

    /// Returns the event name for event conversations.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    /// Returns a copy of the participant list.
    #[must_use]
    pub fn participants(&self) -> Vec<UserId> {
        self.participants.clone()
    }

    /// Checks whether the given user participates in this conversation.
    #[must_use]
    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.participants.contains(&user_id)
    }

    /// Appends a message.
    pub fn push_message(&mut self, sender: UserId, sent_at: NaiveDateTime, body: String) {
        self.messages.push(Message {
            sender,
            sent_at,
            body,
        });
    }

    /// Returns the messages in send order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
