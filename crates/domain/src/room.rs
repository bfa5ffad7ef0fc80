// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The room entity and its booking timeline.
//!
//! A room has fixed capacity, daily open/close hours, and a feature set.
//! Its timeline records booked intervals keyed by start instant.
//!
//! ## Invariants
//!
//! - The half-open intervals of any two timeline entries are disjoint.
//! - Every entry starts at or after the open hour, ends at or before the
//!   close hour, and stays within one local day.

use crate::error::DomainError;
use crate::feature::RoomFeature;
use crate::ids::{EventId, RoomId};
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single timeline entry: the event occupying a slot and its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The event occupying this slot.
    pub event_id: EventId,
    /// The length of the slot in whole hours.
    pub duration_hours: u8,
}

/// A venue with fixed capacity, daily open/close hours, and a feature set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: u32,
    open_hour: u8,
    close_hour: u8,
    features: BTreeSet<RoomFeature>,
    timeline: BTreeMap<NaiveDateTime, Booking>,
}

impl Room {
    /// Creates a new room with a fresh identifier, an empty timeline, and an
    /// empty feature set.
    ///
    /// # Arguments
    ///
    /// * `name` - The room's display name
    /// * `capacity` - Maximum number of attendees, must be greater than 0
    /// * `open_hour` - Hour of day (24h clock) the room opens, in [0,22]
    /// * `close_hour` - Hour of day events must end by, in [1,23], strictly
    ///   after `open_hour`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomParams` if `close_hour > 23`,
    /// `close_hour <= open_hour`, or `capacity == 0`.
    pub fn new(
        name: String,
        capacity: u32,
        open_hour: u8,
        close_hour: u8,
    ) -> Result<Self, DomainError> {
        if close_hour > 23 {
            return Err(DomainError::InvalidRoomParams {
                reason: format!("close hour {close_hour} is past 23"),
            });
        }
        if close_hour <= open_hour {
            return Err(DomainError::InvalidRoomParams {
                reason: format!(
                    "close hour {close_hour} is not after open hour {open_hour}"
                ),
            });
        }
        if capacity == 0 {
            return Err(DomainError::InvalidRoomParams {
                reason: String::from("capacity must be greater than 0"),
            });
        }
        Ok(Self {
            id: RoomId::new(),
            name,
            capacity,
            open_hour,
            close_hour,
            features: BTreeSet::new(),
            timeline: BTreeMap::new(),
        })
    }

    /// Returns the room's identifier.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum number of attendees the room holds.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the hour of day the room opens.
    #[must_use]
    pub const fn open_hour(&self) -> u8 {
        self.open_hour
    }

    /// Returns the hour of day events in the room must end by.
    #[must_use]
    pub const fn close_hour(&self) -> u8 {
        self.close_hour
    }

    /// Checks whether booking `[starts_at, starts_at + duration)` would keep
    /// the timeline invariants.
    ///
    /// Two intervals `[a, a+d)` and `[b, b+d')` conflict iff
    /// `a + d > b && a < b + d'`; a booking ending exactly at the close hour
    /// with zero minutes past is allowed, while any spill of minutes into
    /// the close hour or into the next day is rejected.
    #[must_use]
    pub fn is_free_for(&self, starts_at: NaiveDateTime, duration_hours: u8) -> bool {
        if duration_hours == 0 {
            return false;
        }
        let end_hour: u32 = starts_at.hour() + u32::from(duration_hours);
        if starts_at.hour() < u32::from(self.open_hour) {
            return false;
        }
        if end_hour > u32::from(self.close_hour) {
            return false;
        }
        if end_hour == u32::from(self.close_hour) && starts_at.minute() > 0 {
            return false;
        }
        let candidate_end: NaiveDateTime =
            starts_at + Duration::hours(i64::from(duration_hours));
        self.timeline.iter().all(|(booked_start, booking)| {
            let booked_end: NaiveDateTime =
                *booked_start + Duration::hours(i64::from(booking.duration_hours));
            candidate_end <= *booked_start || starts_at >= booked_end
        })
    }

    /// Books the slot `[starts_at, starts_at + duration)` for an event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotUnavailable` if the slot would violate the
    /// timeline invariants; the timeline is left untouched in that case.
    pub fn book(
        &mut self,
        starts_at: NaiveDateTime,
        duration_hours: u8,
        event_id: EventId,
    ) -> Result<(), DomainError> {
        if !self.is_free_for(starts_at, duration_hours) {
            return Err(DomainError::SlotUnavailable { starts_at });
        }
        self.timeline.insert(
            starts_at,
            Booking {
                event_id,
                duration_hours,
            },
        );
        Ok(())
    }

    /// Removes the booking at the given start instant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingNotFound` if no booking starts at that
    /// instant.
    pub fn unbook(&mut self, starts_at: NaiveDateTime) -> Result<Booking, DomainError> {
        self.timeline
            .remove(&starts_at)
            .ok_or(DomainError::BookingNotFound { starts_at })
    }

    /// Returns the booking starting at the given instant, if any.
    #[must_use]
    pub fn booking_at(&self, starts_at: NaiveDateTime) -> Option<Booking> {
        self.timeline.get(&starts_at).copied()
    }

    /// Returns the booked intervals as `(start, booking)` pairs in start
    /// order. The returned data is a copy.
    #[must_use]
    pub fn bookings(&self) -> Vec<(NaiveDateTime, Booking)> {
        self.timeline
            .iter()
            .map(|(start, booking)| (*start, *booking))
            .collect()
    }

    /// Checks whether the room offers the given feature.
    #[must_use]
    pub fn has_feature(&self, feature: RoomFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Checks whether the room offers every feature in the given set.
    #[must_use]
    pub fn has_all_features(&self, required: &BTreeSet<RoomFeature>) -> bool {
        required.is_subset(&self.features)
    }

    /// Adds a feature to the room. Adding a feature twice is a no-op.
    pub fn add_feature(&mut self, feature: RoomFeature) {
        self.features.insert(feature);
    }

    /// Removes a feature from the room.
    pub fn remove_feature(&mut self, feature: RoomFeature) {
        self.features.remove(&feature);
    }

    /// Returns a copy of the room's feature set.
    #[must_use]
    pub fn features(&self) -> BTreeSet<RoomFeature> {
        self.features.clone()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Capacity: {} | Open at: {}:00 | Closed at: {}:00 | Features: {}",
            self.name,
            self.capacity,
            self.open_hour,
            self.close_hour,
            crate::feature::display_features(&self.features)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 12, 31)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn open_room() -> Room {
        Room::new(String::from("Main Hall"), 10, 9, 21).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_hours_and_capacity() {
        assert!(Room::new(String::from("A"), 10, 9, 24).is_err());
        assert!(Room::new(String::from("A"), 10, 9, 9).is_err());
        assert!(Room::new(String::from("A"), 10, 10, 9).is_err());
        assert!(Room::new(String::from("A"), 0, 9, 21).is_err());
    }

    #[test]
    fn test_new_allows_full_day_hours() {
        assert!(Room::new(String::from("A"), 1, 0, 23).is_ok());
    }

    #[test]
    fn test_is_free_for_respects_open_hours() {
        let room: Room = open_room();
        assert!(room.is_free_for(at(9, 0), 1));
        assert!(!room.is_free_for(at(8, 0), 1));
        assert!(!room.is_free_for(at(20, 0), 2));
    }

    #[test]
    fn test_booking_may_end_exactly_at_close_hour() {
        let room: Room = open_room();
        assert!(room.is_free_for(at(20, 0), 1));
        assert!(!room.is_free_for(at(20, 30), 1));
    }

    #[test]
    fn test_overlapping_booking_rejected() {
        let mut room: Room = open_room();
        room.book(at(9, 0), 2, EventId::new()).unwrap();
        assert!(!room.is_free_for(at(9, 30), 1));
        assert!(!room.is_free_for(at(10, 0), 1));
        assert!(!room.is_free_for(at(8, 30), 1));
    }

    #[test]
    fn test_back_to_back_bookings_allowed() {
        let mut room: Room = open_room();
        room.book(at(9, 0), 2, EventId::new()).unwrap();
        assert!(room.is_free_for(at(11, 0), 1));
        room.book(at(11, 0), 1, EventId::new()).unwrap();
        assert_eq!(room.bookings().len(), 2);
    }

    #[test]
    fn test_book_on_taken_slot_leaves_timeline_untouched() {
        let mut room: Room = open_room();
        let first: EventId = EventId::new();
        room.book(at(9, 0), 2, first).unwrap();
        let result = room.book(at(10, 0), 1, EventId::new());
        assert!(result.is_err());
        assert_eq!(room.bookings().len(), 1);
        assert_eq!(room.booking_at(at(9, 0)).unwrap().event_id, first);
    }

    #[test]
    fn test_unbook_removes_only_the_named_slot() {
        let mut room: Room = open_room();
        room.book(at(9, 0), 1, EventId::new()).unwrap();
        room.book(at(12, 0), 1, EventId::new()).unwrap();
        room.unbook(at(9, 0)).unwrap();
        assert!(room.booking_at(at(9, 0)).is_none());
        assert!(room.booking_at(at(12, 0)).is_some());
        assert!(room.unbook(at(9, 0)).is_err());
    }

    #[test]
    fn test_feature_set_operations() {
        let mut room: Room = open_room();
        room.add_feature(RoomFeature::Projector);
        room.add_feature(RoomFeature::Whiteboard);
        assert!(room.has_feature(RoomFeature::Projector));
        let required: BTreeSet<RoomFeature> =
            [RoomFeature::Projector, RoomFeature::Whiteboard].into();
        assert!(room.has_all_features(&required));
        room.remove_feature(RoomFeature::Whiteboard);
        assert!(!room.has_all_features(&required));
    }
}
