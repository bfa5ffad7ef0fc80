// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The event entity.
//!
//! An event is a scheduled occurrence in one room for one contiguous
//! hour-aligned interval, with zero or more speakers and a bounded attendee
//! set. Its kind is derived from the speaker count.

use crate::error::DomainError;
use crate::feature::RoomFeature;
use crate::ids::{EventId, RoomId, UserId};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// The date-time display format used across the system.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// The kind of an event, derived from its speaker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// No speakers.
    Party,
    /// Exactly one speaker.
    Talk,
    /// Two or more speakers.
    Panel,
}

impl EventKind {
    /// Returns the display name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Party => "Party",
            Self::Talk => "Talk",
            Self::Panel => "Panel",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled occurrence in one room with speakers and attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    starts_at: NaiveDateTime,
    duration_hours: u8,
    room_id: RoomId,
    capacity: u32,
    speakers: HashSet<UserId>,
    attendees: HashSet<UserId>,
    features: BTreeSet<RoomFeature>,
}

impl Event {
    /// Creates a new event with a fresh identifier and empty speaker and
    /// attendee sets.
    ///
    /// # Arguments
    ///
    /// * `name` - The event's display name
    /// * `starts_at` - Local start date-time
    /// * `room_id` - The room hosting the event
    /// * `capacity` - Maximum attendees, must be greater than 0
    /// * `duration_hours` - Whole hours, in [1,23]
    /// * `features` - The feature set the event requires of its room
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEventParams` if the duration is outside
    /// [1,23] or the capacity is 0.
    pub fn new(
        name: String,
        starts_at: NaiveDateTime,
        room_id: RoomId,
        capacity: u32,
        duration_hours: u8,
        features: BTreeSet<RoomFeature>,
    ) -> Result<Self, DomainError> {
        if duration_hours == 0 || duration_hours > 23 {
            return Err(DomainError::InvalidEventParams {
                reason: format!(
                    "duration must be between 1 and 23 hours, got {duration_hours}"
                ),
            });
        }
        if capacity == 0 {
            return Err(DomainError::InvalidEventParams {
                reason: String::from("capacity must be greater than 0"),
            });
        }
        Ok(Self {
            id: EventId::new(),
            name,
            starts_at,
            duration_hours,
            room_id,
            capacity,
            speakers: HashSet::new(),
            attendees: HashSet::new(),
            features,
        })
    }

    /// Returns the event's identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the event's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local start date-time.
    #[must_use]
    pub const fn starts_at(&self) -> NaiveDateTime {
        self.starts_at
    }

    /// Returns the event length in whole hours.
    #[must_use]
    pub const fn duration_hours(&self) -> u8 {
        self.duration_hours
    }

    /// Returns the local end instant (exclusive).
    #[must_use]
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at + Duration::hours(i64::from(self.duration_hours))
    }

    /// Checks whether this event's half-open interval overlaps another's.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.starts_at < other.ends_at() && other.starts_at < self.ends_at()
    }

    /// Returns the hosting room's identifier.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the maximum number of attendees.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sets the maximum number of attendees.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEventParams` if the new capacity is 0,
    /// or `DomainError::CapacityBelowAttendees` if it is below the current
    /// attendee count. The capacity is unchanged on error.
    pub fn set_capacity(&mut self, capacity: u32) -> Result<(), DomainError> {
        if capacity == 0 {
            return Err(DomainError::InvalidEventParams {
                reason: String::from("capacity must be greater than 0"),
            });
        }
        if (capacity as usize) < self.attendees.len() {
            return Err(DomainError::CapacityBelowAttendees {
                attendees: self.attendees.len(),
                requested: capacity,
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Returns the event kind derived from the speaker count.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self.speakers.len() {
            0 => EventKind::Party,
            1 => EventKind::Talk,
            _ => EventKind::Panel,
        }
    }

    /// Checks whether the given user speaks at this event.
    #[must_use]
    pub fn has_speaker(&self, user_id: UserId) -> bool {
        self.speakers.contains(&user_id)
    }

    /// Adds a speaker. Adding a present speaker is a no-op.
    pub fn add_speaker(&mut self, user_id: UserId) {
        self.speakers.insert(user_id);
    }

    /// Removes a speaker if present.
    pub fn remove_speaker(&mut self, user_id: UserId) {
        self.speakers.remove(&user_id);
    }

    /// Returns a copy of the speaker set.
    #[must_use]
    pub fn speakers(&self) -> HashSet<UserId> {
        self.speakers.clone()
    }

    /// Checks whether the given user has signed up for this event.
    #[must_use]
    pub fn is_user_signed_up(&self, user_id: UserId) -> bool {
        self.attendees.contains(&user_id)
    }

    /// Adds an attendee. Adding a present attendee is a no-op.
    pub fn add_attendee(&mut self, user_id: UserId) {
        self.attendees.insert(user_id);
    }

    /// Removes an attendee if present.
    pub fn remove_attendee(&mut self, user_id: UserId) {
        self.attendees.remove(&user_id);
    }

    /// Returns a copy of the attendee set.
    #[must_use]
    pub fn attendees(&self) -> HashSet<UserId> {
        self.attendees.clone()
    }

    /// Returns the number of attendees signed up.
    #[must_use]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Checks whether the event requires the given feature.
    #[must_use]
    pub fn has_feature(&self, feature: RoomFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Adds a required feature.
    pub fn add_feature(&mut self, feature: RoomFeature) {
        self.features.insert(feature);
    }

    /// Removes a required feature.
    pub fn remove_feature(&mut self, feature: RoomFeature) {
        self.features.remove(&feature);
    }

    /// Returns a copy of the required feature set.
    #[must_use]
    pub fn features(&self) -> BTreeSet<RoomFeature> {
        self.features.clone()
    }

    /// Returns the start date-time in the system display format.
    #[must_use]
    pub fn schedule_string(&self) -> String {
        self.starts_at.format(DATE_TIME_FORMAT).to_string()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} : {} | Event Type: {}",
            self.name,
            self.schedule_string(),
            self.kind()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 12, 31)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(hour: u32, duration: u8) -> Event {
        Event::new(
            String::from("Vaccines"),
            at(hour),
            RoomId::new(),
            2,
            duration,
            BTreeSet::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_duration_and_capacity() {
        assert!(Event::new(
            String::from("A"),
            at(9),
            RoomId::new(),
            2,
            0,
            BTreeSet::new()
        )
        .is_err());
        assert!(Event::new(
            String::from("A"),
            at(9),
            RoomId::new(),
            2,
            24,
            BTreeSet::new()
        )
        .is_err());
        assert!(Event::new(
            String::from("A"),
            at(9),
            RoomId::new(),
            0,
            1,
            BTreeSet::new()
        )
        .is_err());
    }

    #[test]
    fn test_kind_follows_speaker_count() {
        let mut e: Event = event(9, 1);
        assert_eq!(e.kind(), EventKind::Party);
        let s1: UserId = UserId::new();
        e.add_speaker(s1);
        assert_eq!(e.kind(), EventKind::Talk);
        e.add_speaker(UserId::new());
        assert_eq!(e.kind(), EventKind::Panel);
        e.remove_speaker(s1);
        assert_eq!(e.kind(), EventKind::Talk);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let morning: Event = event(9, 2);
        let adjacent: Event = event(11, 1);
        let inside: Event = event(10, 1);
        assert!(!morning.overlaps(&adjacent));
        assert!(!adjacent.overlaps(&morning));
        assert!(morning.overlaps(&inside));
        assert!(inside.overlaps(&morning));
    }

    #[test]
    fn test_set_capacity_guards_attendee_floor() {
        let mut e: Event = event(9, 1);
        e.add_attendee(UserId::new());
        e.add_attendee(UserId::new());
        assert!(e.set_capacity(1).is_err());
        assert!(e.set_capacity(0).is_err());
        assert_eq!(e.capacity(), 2);
        e.set_capacity(5).unwrap();
        assert_eq!(e.capacity(), 5);
    }

    #[test]
    fn test_display_includes_schedule_and_kind() {
        let e: Event = event(9, 1);
        assert_eq!(
            e.to_string(),
            "Vaccines : 31/12/2020 09:00 | Event Type: Party"
        );
    }
}
