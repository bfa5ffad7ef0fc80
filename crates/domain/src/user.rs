// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The user entity.
//!
//! User state is a sum of common fields and a role extension: every user
//! carries the common fields, and VIPs additionally carry favourite speakers
//! and interested events. The extension travels with the role so no use-case
//! code ever needs a downcast.

use crate::error::DomainError;
use crate::ids::{ConversationId, EventId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The role a user holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Regular conference attendee.
    Attendee,
    /// Conference staff: creates rooms, events, and users.
    Organizer,
    /// Speaks at talks and panels.
    Speaker,
    /// Browsing without an account.
    Guest,
    /// Attendee with favourites, interests, and party privileges.
    Vip,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Attendee,
        Self::Organizer,
        Self::Speaker,
        Self::Guest,
        Self::Vip,
    ];

    /// Returns the display name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attendee => "Attendee",
            Self::Organizer => "Organizer",
            Self::Speaker => "Speaker",
            Self::Guest => "Guest",
            Self::Vip => "VIP",
        }
    }

    /// Parses a role from its display name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not match any role.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownRole(name.to_owned()))
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The VIP-only slice of user state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VipProfile {
    /// Speakers the VIP follows; new events with one of these enqueue a
    /// notification.
    pub favourite_speakers: HashSet<UserId>,
    /// The VIP's wishlist of events.
    pub interested_events: HashSet<EventId>,
}

/// Role-dependent user state.
///
/// `UserData = CommonFields + RoleExtension`; only the VIP role carries
/// extra state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleExtension {
    /// No role-specific state.
    None,
    /// VIP favourites and interests.
    Vip(VipProfile),
}

/// A user account: attendee, organizer, speaker, guest, or VIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: String,
    role: UserRole,
    extension: RoleExtension,
    events_signed_up: Vec<EventId>,
    friends: Vec<UserId>,
    conversations: Vec<ConversationId>,
    unread_conversations: Vec<ConversationId>,
}

impl User {
    /// Creates a new user with a fresh identifier and empty lists.
    ///
    /// A VIP role receives an empty [`VipProfile`]; every other role carries
    /// no extension.
    #[must_use]
    pub fn new(name: String, email: String, password: String, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password,
            role,
            extension: Self::extension_for(role),
            events_signed_up: Vec::new(),
            friends: Vec::new(),
            conversations: Vec::new(),
            unread_conversations: Vec::new(),
        }
    }

    fn extension_for(role: UserRole) -> RoleExtension {
        match role {
            UserRole::Vip => RoleExtension::Vip(VipProfile::default()),
            _ => RoleExtension::None,
        }
    }

    /// Returns the user's identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user's email, which doubles as the login name.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Checks the given password against the stored one.
    ///
    /// Credential storage is plaintext in this system; the core treats
    /// identity as an opaque token.
    #[must_use]
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// Returns the user's role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Changes the user's role, rebuilding the role extension.
    ///
    /// Moving into the VIP role starts with an empty profile; moving out of
    /// it drops the profile.
    pub fn set_role(&mut self, role: UserRole) {
        if role != self.role {
            self.role = role;
            self.extension = Self::extension_for(role);
        }
    }

    /// Returns the VIP profile when the user holds the VIP role.
    #[must_use]
    pub const fn vip_profile(&self) -> Option<&VipProfile> {
        match &self.extension {
            RoleExtension::Vip(profile) => Some(profile),
            RoleExtension::None => None,
        }
    }

    /// Returns the VIP profile mutably when the user holds the VIP role.
    pub fn vip_profile_mut(&mut self) -> Option<&mut VipProfile> {
        match &mut self.extension {
            RoleExtension::Vip(profile) => Some(profile),
            RoleExtension::None => None,
        }
    }

    /// Returns a copy of the ids of events the user signed up for.
    #[must_use]
    pub fn events_signed_up(&self) -> Vec<EventId> {
        self.events_signed_up.clone()
    }

    /// Checks whether the user is signed up for the given event.
    #[must_use]
    pub fn is_signed_up_for(&self, event_id: EventId) -> bool {
        self.events_signed_up.contains(&event_id)
    }

    /// Records a sign-up. Recording a present id is a no-op.
    pub fn add_event(&mut self, event_id: EventId) {
        if !self.events_signed_up.contains(&event_id) {
            self.events_signed_up.push(event_id);
        }
    }

    /// Removes a sign-up record if present.
    pub fn remove_event(&mut self, event_id: EventId) {
        self.events_signed_up.retain(|id| *id != event_id);
    }

    /// Returns a copy of the user's friend list.
    #[must_use]
    pub fn friends(&self) -> Vec<UserId> {
        self.friends.clone()
    }

    /// Checks whether the given user is on the friend list.
    #[must_use]
    pub fn is_friend(&self, user_id: UserId) -> bool {
        self.friends.contains(&user_id)
    }

    /// Adds a friend. Adding a present friend is a no-op.
    pub fn add_friend(&mut self, user_id: UserId) {
        if !self.friends.contains(&user_id) {
            self.friends.push(user_id);
        }
    }

    /// Removes a friend if present.
    pub fn remove_friend(&mut self, user_id: UserId) {
        self.friends.retain(|id| *id != user_id);
    }

    /// Returns a copy of the user's conversation ids.
    #[must_use]
    pub fn conversations(&self) -> Vec<ConversationId> {
        self.conversations.clone()
    }

    /// Checks whether the user participates in the given conversation.
    #[must_use]
    pub fn has_conversation(&self, conversation_id: ConversationId) -> bool {
        self.conversations.contains(&conversation_id)
    }

    /// Adds a conversation to the user's list. Duplicates are ignored.
    pub fn add_conversation(&mut self, conversation_id: ConversationId) {
        if !self.conversations.contains(&conversation_id) {
            self.conversations.push(conversation_id);
        }
    }

    /// Returns a copy of the unread conversation ids.
    #[must_use]
    pub fn unread_conversations(&self) -> Vec<ConversationId> {
        self.unread_conversations.clone()
    }

    /// Marks a conversation unread for this user. Duplicates are ignored.
    pub fn mark_conversation_unread(&mut self, conversation_id: ConversationId) {
        if !self.unread_conversations.contains(&conversation_id) {
            self.unread_conversations.push(conversation_id);
        }
    }

    /// Clears the unread mark on a conversation.
    pub fn mark_conversation_read(&mut self, conversation_id: ConversationId) {
        self.unread_conversations.retain(|id| *id != conversation_id);
    }
}
