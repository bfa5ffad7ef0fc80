// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The event store.
//!
//! Owns every event with its speaker set, attendee set, and capacity, and
//! answers the time/day/speaker queries. The registry never touches the
//! room catalog; cross-store rules live in the scheduling service.

use crate::error::CoreError;
use atrium_domain::{Event, EventId, RoomFeature, RoomId, UserId};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Stores events and their membership sets.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: HashMap<EventId, Event>,
}

impl EventRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a loaded events container.
    #[must_use]
    pub const fn from_events(events: HashMap<EventId, Event>) -> Self {
        Self { events }
    }

    /// Hands the events container back for persistence.
    #[must_use]
    pub fn into_events(self) -> HashMap<EventId, Event> {
        self.events
    }

    /// Creates an event and returns its identifier.
    ///
    /// The registry does not consult the room catalog; callers go through
    /// the scheduling service to couple the two.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEventParams` (wrapped) if the duration is outside
    /// [1,23] or the capacity is 0.
    pub fn create(
        &mut self,
        name: String,
        starts_at: NaiveDateTime,
        room_id: RoomId,
        capacity: u32,
        duration_hours: u8,
        features: BTreeSet<RoomFeature>,
    ) -> Result<EventId, CoreError> {
        let event: Event =
            Event::new(name, starts_at, room_id, capacity, duration_hours, features)?;
        let event_id: EventId = event.id();
        self.events.insert(event_id, event);
        Ok(event_id)
    }

    /// Returns the event with the given identifier, if present.
    #[must_use]
    pub fn get(&self, event_id: EventId) -> Option<&Event> {
        self.events.get(&event_id)
    }

    /// Returns the event with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn require(&self, event_id: EventId) -> Result<&Event, CoreError> {
        self.events
            .get(&event_id)
            .ok_or(CoreError::EventNotFound(event_id))
    }

    fn require_mut(&mut self, event_id: EventId) -> Result<&mut Event, CoreError> {
        self.events
            .get_mut(&event_id)
            .ok_or(CoreError::EventNotFound(event_id))
    }

    /// Adds a speaker to an event. A present speaker is left as-is.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn add_speaker(&mut self, event_id: EventId, user_id: UserId) -> Result<(), CoreError> {
        self.require_mut(event_id)?.add_speaker(user_id);
        Ok(())
    }

    /// Adds a set of speakers to an event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn add_speakers(
        &mut self,
        event_id: EventId,
        user_ids: &HashSet<UserId>,
    ) -> Result<(), CoreError> {
        let event = self.require_mut(event_id)?;
        for user_id in user_ids {
            event.add_speaker(*user_id);
        }
        Ok(())
    }

    /// Removes a speaker from an event if present.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn remove_speaker(
        &mut self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), CoreError> {
        self.require_mut(event_id)?.remove_speaker(user_id);
        Ok(())
    }

    /// Adds an attendee to an event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn add_attendee(&mut self, event_id: EventId, user_id: UserId) -> Result<(), CoreError> {
        self.require_mut(event_id)?.add_attendee(user_id);
        Ok(())
    }

    /// Removes an attendee from an event if present.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn remove_attendee(
        &mut self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), CoreError> {
        self.require_mut(event_id)?.remove_attendee(user_id);
        Ok(())
    }

    /// Sets an event's capacity.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist,
    /// `InvalidEventParams` (wrapped) if the capacity is 0, or
    /// `CapacityBelowAttendees` (wrapped) if it is below the current
    /// attendee count.
    pub fn set_capacity(&mut self, event_id: EventId, capacity: u32) -> Result<(), CoreError> {
        Ok(self.require_mut(event_id)?.set_capacity(capacity)?)
    }

    /// Checks whether the given user has signed up for the given event.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn is_user_signed_up(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<bool, CoreError> {
        Ok(self.require(event_id)?.is_user_signed_up(user_id))
    }

    /// Returns every event identifier.
    #[must_use]
    pub fn all_ids(&self) -> Vec<EventId> {
        self.events.keys().copied().collect()
    }

    /// Returns the events starting on the given local day.
    #[must_use]
    pub fn by_day(&self, date: NaiveDate) -> Vec<EventId> {
        self.events
            .values()
            .filter(|event| event.starts_at().date() == date)
            .map(Event::id)
            .collect()
    }

    /// Returns the events the given user speaks at.
    #[must_use]
    pub fn by_speaker(&self, user_id: UserId) -> Vec<EventId> {
        self.events
            .values()
            .filter(|event| event.has_speaker(user_id))
            .map(Event::id)
            .collect()
    }

    /// Returns the events whose start instant equals none of the given
    /// events' start instants.
    ///
    /// This compares exact instants, not interval overlap; it backs the
    /// "available events" listing. Interval-level conflicts are enforced
    /// at sign-up.
    #[must_use]
    pub fn no_conflict_with(&self, conflicting_ids: &[EventId]) -> Vec<EventId> {
        let conflicting_times: HashSet<NaiveDateTime> = conflicting_ids
            .iter()
            .filter_map(|event_id| self.events.get(event_id))
            .map(Event::starts_at)
            .collect();
        self.events
            .values()
            .filter(|event| !conflicting_times.contains(&event.starts_at()))
            .map(Event::id)
            .collect()
    }

    /// Removes an event and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event does not exist.
    pub fn remove(&mut self, event_id: EventId) -> Result<Event, CoreError> {
        self.events
            .remove(&event_id)
            .ok_or(CoreError::EventNotFound(event_id))
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the registry holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over every event.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }
}
