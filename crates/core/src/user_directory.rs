// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The user store.
//!
//! Owns the user accounts and the attendee↔event back-references the
//! scheduling core reads and mutates. The event's attendee set is the
//! authoritative side; the per-user list here is kept in lockstep by the
//! sign-up service so neither side is ever mutated alone.

use crate::error::CoreError;
use atrium_domain::{EventId, User, UserId, UserRole};

/// Stores user accounts, keyed by identifier, ordered by creation.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a loaded users container.
    #[must_use]
    pub const fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Hands the users container back for persistence.
    #[must_use]
    pub fn into_users(self) -> Vec<User> {
        self.users
    }

    /// Creates a user account and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `EmailTaken` if another account already uses the email.
    pub fn create_user(
        &mut self,
        name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> Result<UserId, CoreError> {
        if self.find_by_email(&email).is_some() {
            return Err(CoreError::EmailTaken(email));
        }
        let user: User = User::new(name, email, password, role);
        let user_id: UserId = user.id();
        self.users.push(user);
        Ok(user_id)
    }

    /// Returns the user with the given identifier, if present.
    #[must_use]
    pub fn get(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == user_id)
    }

    /// Returns the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub fn require(&self, user_id: UserId) -> Result<&User, CoreError> {
        self.get(user_id).ok_or(CoreError::UserNotFound(user_id))
    }

    /// Returns the user with the given identifier mutably.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub fn require_mut(&mut self, user_id: UserId) -> Result<&mut User, CoreError> {
        self.users
            .iter_mut()
            .find(|user| user.id() == user_id)
            .ok_or(CoreError::UserNotFound(user_id))
    }

    /// Finds a user by login email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email() == email)
    }

    /// Returns the ids of events the user signed up for, as a copy.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub fn events_of(&self, user_id: UserId) -> Result<Vec<EventId>, CoreError> {
        Ok(self.require(user_id)?.events_signed_up())
    }

    /// Records an event on the user's signed-up list.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub fn add_event_to_user(
        &mut self,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<(), CoreError> {
        self.require_mut(user_id)?.add_event(event_id);
        Ok(())
    }

    /// Removes an event from the user's signed-up list.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub fn remove_event_from_user(
        &mut self,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<(), CoreError> {
        self.require_mut(user_id)?.remove_event(event_id);
        Ok(())
    }

    /// Returns the ids of every user holding the given role, in creation
    /// order.
    #[must_use]
    pub fn users_of_role(&self, role: UserRole) -> Vec<UserId> {
        self.users
            .iter()
            .filter(|user| user.role() == role)
            .map(User::id)
            .collect()
    }

    /// Iterates over the VIP users.
    pub fn vips(&self) -> impl Iterator<Item = &User> {
        self.users
            .iter()
            .filter(|user| user.role() == UserRole::Vip)
    }

    /// Checks whether the given speaker is one of the VIP's favourites.
    ///
    /// Returns false when the user is not a VIP or does not exist.
    #[must_use]
    pub fn is_favourite_speaker(&self, vip_id: UserId, speaker_id: UserId) -> bool {
        self.get(vip_id)
            .and_then(User::vip_profile)
            .is_some_and(|profile| profile.favourite_speakers.contains(&speaker_id))
    }

    /// Adds a speaker to a VIP's favourites.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist, or `NotVip` if the
    /// user does not hold the VIP role.
    pub fn like_speaker(&mut self, vip_id: UserId, speaker_id: UserId) -> Result<(), CoreError> {
        self.vip_profile_mut(vip_id)?
            .favourite_speakers
            .insert(speaker_id);
        Ok(())
    }

    /// Removes a speaker from a VIP's favourites.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist, or `NotVip` if the
    /// user does not hold the VIP role.
    pub fn dislike_speaker(
        &mut self,
        vip_id: UserId,
        speaker_id: UserId,
    ) -> Result<(), CoreError> {
        self.vip_profile_mut(vip_id)?
            .favourite_speakers
            .remove(&speaker_id);
        Ok(())
    }

    /// Adds an event to a VIP's interest wishlist.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist, or `NotVip` if the
    /// user does not hold the VIP role.
    pub fn interested_in_event(
        &mut self,
        vip_id: UserId,
        event_id: EventId,
    ) -> Result<(), CoreError> {
        self.vip_profile_mut(vip_id)?.interested_events.insert(event_id);
        Ok(())
    }

    /// Removes an event from a VIP's interest wishlist. Removing an absent
    /// event is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist, or `NotVip` if the
    /// user does not hold the VIP role.
    pub fn uninterested_in_event(
        &mut self,
        vip_id: UserId,
        event_id: EventId,
    ) -> Result<(), CoreError> {
        self.vip_profile_mut(vip_id)?.interested_events.remove(&event_id);
        Ok(())
    }

    /// Drops every VIP interest reference to the given event.
    pub fn purge_event_interest(&mut self, event_id: EventId) {
        for user in &mut self.users {
            if let Some(profile) = user.vip_profile_mut() {
                profile.interested_events.remove(&event_id);
            }
        }
    }

    fn vip_profile_mut(
        &mut self,
        vip_id: UserId,
    ) -> Result<&mut atrium_domain::VipProfile, CoreError> {
        let user: &mut User = self.require_mut(vip_id)?;
        let user_id: UserId = user.id();
        user.vip_profile_mut()
            .ok_or(CoreError::NotVip { user_id })
    }

    /// Iterates over every user in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Returns the number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns whether the directory holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
