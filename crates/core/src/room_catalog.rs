// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The room store.
//!
//! Owns every room and answers availability queries against the per-room
//! booking timelines. All mutators either succeed completely or leave the
//! catalog unchanged.

use crate::error::CoreError;
use atrium_domain::{Booking, EventId, Room, RoomFeature, RoomId};
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashMap};

/// Stores rooms and records bookings on their timelines.
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: HashMap<RoomId, Room>,
    /// Insertion order, which `suggest` and listings preserve.
    order: Vec<RoomId>,
}

impl RoomCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a loaded rooms container.
    ///
    /// Listing order after a load follows the container's iteration order.
    #[must_use]
    pub fn from_rooms(rooms: HashMap<RoomId, Room>) -> Self {
        let order: Vec<RoomId> = rooms.keys().copied().collect();
        Self { rooms, order }
    }

    /// Hands the rooms container back for persistence.
    #[must_use]
    pub fn into_rooms(self) -> HashMap<RoomId, Room> {
        self.rooms
    }

    /// Creates a room and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomParams` (wrapped) if the hours or capacity are
    /// out of bounds.
    pub fn create_room(
        &mut self,
        name: String,
        capacity: u32,
        open_hour: u8,
        close_hour: u8,
    ) -> Result<RoomId, CoreError> {
        let room: Room = Room::new(name, capacity, open_hour, close_hour)?;
        let room_id: RoomId = room.id();
        self.rooms.insert(room_id, room);
        self.order.push(room_id);
        Ok(room_id)
    }

    /// Returns the room with the given identifier, if present.
    #[must_use]
    pub fn get(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.get(&room_id)
    }

    fn require(&self, room_id: RoomId) -> Result<&Room, CoreError> {
        self.rooms
            .get(&room_id)
            .ok_or(CoreError::RoomNotFound(room_id))
    }

    fn require_mut(&mut self, room_id: RoomId) -> Result<&mut Room, CoreError> {
        self.rooms
            .get_mut(&room_id)
            .ok_or(CoreError::RoomNotFound(room_id))
    }

    /// Checks whether booking the slot would preserve the room's timeline
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist.
    pub fn is_free_for(
        &self,
        room_id: RoomId,
        starts_at: NaiveDateTime,
        duration_hours: u8,
    ) -> Result<bool, CoreError> {
        Ok(self.require(room_id)?.is_free_for(starts_at, duration_hours))
    }

    /// Books a slot for an event.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist, or
    /// `RoomUnavailable` if the slot would violate the timeline invariants.
    pub fn book(
        &mut self,
        room_id: RoomId,
        starts_at: NaiveDateTime,
        duration_hours: u8,
        event_id: EventId,
    ) -> Result<(), CoreError> {
        self.require_mut(room_id)?
            .book(starts_at, duration_hours, event_id)
            .map_err(|_| CoreError::RoomUnavailable { starts_at })
    }

    /// Removes the booking at the given instant in the given room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist, or
    /// `BookingNotFound` (wrapped) if no booking starts at that instant.
    pub fn unbook(
        &mut self,
        room_id: RoomId,
        starts_at: NaiveDateTime,
    ) -> Result<Booking, CoreError> {
        Ok(self.require_mut(room_id)?.unbook(starts_at)?)
    }

    /// Adds a feature to a room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist.
    pub fn add_feature(
        &mut self,
        room_id: RoomId,
        feature: RoomFeature,
    ) -> Result<(), CoreError> {
        self.require_mut(room_id)?.add_feature(feature);
        Ok(())
    }

    /// Removes a feature from a room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist.
    pub fn remove_feature(
        &mut self,
        room_id: RoomId,
        feature: RoomFeature,
    ) -> Result<(), CoreError> {
        self.require_mut(room_id)?.remove_feature(feature);
        Ok(())
    }

    /// Checks whether a room offers the given feature.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist.
    pub fn has_feature(&self, room_id: RoomId, feature: RoomFeature) -> Result<bool, CoreError> {
        Ok(self.require(room_id)?.has_feature(feature))
    }

    /// Checks whether a room offers every feature in the given set.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist.
    pub fn has_all_features(
        &self,
        room_id: RoomId,
        required: &BTreeSet<RoomFeature>,
    ) -> Result<bool, CoreError> {
        Ok(self.require(room_id)?.has_all_features(required))
    }

    /// Returns the rooms able to host an event: features cover the required
    /// set, capacity is at least `min_capacity`, and the slot is free.
    ///
    /// Ordering is the catalog's stable insertion order; no ranking is
    /// applied.
    #[must_use]
    pub fn suggest(
        &self,
        required_features: &BTreeSet<RoomFeature>,
        min_capacity: u32,
        starts_at: NaiveDateTime,
        duration_hours: u8,
    ) -> Vec<RoomId> {
        self.order
            .iter()
            .filter_map(|room_id| self.rooms.get(room_id))
            .filter(|room| {
                room.has_all_features(required_features)
                    && room.capacity() >= min_capacity
                    && room.is_free_for(starts_at, duration_hours)
            })
            .map(Room::id)
            .collect()
    }

    /// Returns every room identifier in insertion order.
    #[must_use]
    pub fn all_ids(&self) -> Vec<RoomId> {
        self.order.clone()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns whether the catalog holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
