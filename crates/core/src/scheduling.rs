// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scheduling service.
//!
//! Owns the cross-entity invariants between the room catalog, the event
//! registry, and the user directory: room timelines stay disjoint, event
//! capacity never exceeds the room's, required features stay covered, and
//! speakers never hold two engagements within 60 minutes of each other.
//!
//! Every function validates all of its preconditions before the first
//! mutation, so a returned error implies the stores are unchanged. The
//! service holds no state of its own; it borrows the stores per call, which
//! is the single exclusion discipline the single-threaded model requires.

use crate::error::CoreError;
use crate::event_registry::EventRegistry;
use crate::messaging::{MessageBoard, local_now};
use crate::room_catalog::RoomCatalog;
use crate::user_directory::UserDirectory;
use atrium_domain::{
    ConversationKind, Event, EventId, Room, RoomFeature, RoomId, UserId,
};
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashSet};

/// The proposed speakers are conflicted out within this many minutes of an
/// existing engagement's start.
const SPEAKER_CONFLICT_WINDOW_MINUTES: i64 = 60;

/// Input for [`create_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// The event's display name.
    pub name: String,
    /// Local start date-time.
    pub starts_at: NaiveDateTime,
    /// The room to book.
    pub room_id: RoomId,
    /// Speakers to schedule; conflicted ones are skipped, not fatal.
    pub proposed_speakers: HashSet<UserId>,
    /// Maximum attendees for the event.
    pub capacity: u32,
    /// Event length in whole hours, in [1,23].
    pub duration_hours: u8,
    /// Features the event requires of its room.
    pub features: BTreeSet<RoomFeature>,
}

/// The outcome of a successful [`create_event`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    /// The new event's identifier.
    pub event_id: EventId,
    /// Proposed speakers skipped for a schedule conflict.
    pub skipped_speakers: Vec<UserId>,
}

/// Creates an event: books the room, schedules the non-conflicted speakers,
/// and notifies VIPs who favour any scheduled speaker.
///
/// Preconditions, checked in order before any mutation:
/// 1. the room is free for `[starts_at, starts_at + duration)`;
/// 2. the room's capacity covers the event's capacity;
/// 3. the room's features cover the event's required features.
///
/// Proposed speakers with another speaking engagement starting within
/// ±60 minutes of `starts_at` are skipped and reported in the result; the
/// event itself is still created. The VIP notification is a fire-and-forget
/// message enqueued after all scheduling mutations.
///
/// # Errors
///
/// Returns `RoomNotFound`, `RoomUnavailable`, `RoomCapacityExceeded`,
/// `MissingFeatures`, or `InvalidEventParams` (wrapped); the stores are
/// unchanged on error.
pub fn create_event(
    rooms: &mut RoomCatalog,
    events: &mut EventRegistry,
    users: &mut UserDirectory,
    board: &mut MessageBoard,
    created_by: UserId,
    request: NewEvent,
) -> Result<CreatedEvent, CoreError> {
    let room: &Room = rooms
        .get(request.room_id)
        .ok_or(CoreError::RoomNotFound(request.room_id))?;
    if !room.is_free_for(request.starts_at, request.duration_hours) {
        return Err(CoreError::RoomUnavailable {
            starts_at: request.starts_at,
        });
    }
    if room.capacity() < request.capacity {
        return Err(CoreError::RoomCapacityExceeded {
            room_capacity: room.capacity(),
            requested: request.capacity,
        });
    }
    if !room.has_all_features(&request.features) {
        let missing: Vec<RoomFeature> = request
            .features
            .iter()
            .filter(|feature| !room.has_feature(**feature))
            .copied()
            .collect();
        return Err(CoreError::MissingFeatures { missing });
    }

    let event_id: EventId = events.create(
        request.name,
        request.starts_at,
        request.room_id,
        request.capacity,
        request.duration_hours,
        request.features,
    )?;
    if let Err(err) = rooms.book(
        request.room_id,
        request.starts_at,
        request.duration_hours,
        event_id,
    ) {
        let _removed = events.remove(event_id);
        return Err(err);
    }

    let mut scheduled: Vec<UserId> = Vec::new();
    let mut skipped_speakers: Vec<UserId> = Vec::new();
    for speaker_id in request.proposed_speakers {
        if speaker_has_conflict(events, speaker_id, request.starts_at) {
            skipped_speakers.push(speaker_id);
        } else {
            events.add_speaker(event_id, speaker_id)?;
            scheduled.push(speaker_id);
        }
    }

    notify_vips(events, users, board, created_by, event_id, &scheduled);

    Ok(CreatedEvent {
        event_id,
        skipped_speakers,
    })
}

/// Schedules a speaker into an existing event.
///
/// # Errors
///
/// Returns `EventNotFound`, `DuplicateMembership` if the speaker already
/// speaks at the event, or `SpeakerConflict` if the ±60-minute rule fires.
pub fn add_speaker_to_event(
    events: &mut EventRegistry,
    event_id: EventId,
    speaker_id: UserId,
) -> Result<(), CoreError> {
    let event: &Event = events.require(event_id)?;
    if event.has_speaker(speaker_id) {
        return Err(CoreError::DuplicateMembership {
            user_id: speaker_id,
        });
    }
    if speaker_has_conflict(events, speaker_id, event.starts_at()) {
        return Err(CoreError::SpeakerConflict { speaker_id });
    }
    events.add_speaker(event_id, speaker_id)
}

/// Removes a speaker from an event's speaker set. Removing an absent
/// speaker is a no-op.
///
/// # Errors
///
/// Returns `EventNotFound` if the event does not exist.
pub fn remove_speaker_from_event(
    events: &mut EventRegistry,
    event_id: EventId,
    speaker_id: UserId,
) -> Result<(), CoreError> {
    events.remove_speaker(event_id, speaker_id)
}

/// Cancels an event: purges every attendee's back-reference and every VIP
/// interest reference, releases the room slot, and removes the event.
///
/// The cancelled identifier is never reused; event ids are drawn fresh at
/// creation.
///
/// # Errors
///
/// Returns `EventNotFound`, `RoomNotFound`, or `BookingNotFound` (wrapped)
/// if the stores disagree about the booking; nothing is changed in that
/// case.
pub fn cancel_event(
    rooms: &mut RoomCatalog,
    events: &mut EventRegistry,
    users: &mut UserDirectory,
    event_id: EventId,
) -> Result<(), CoreError> {
    let event: &Event = events.require(event_id)?;
    let room_id: RoomId = event.room_id();
    let starts_at: NaiveDateTime = event.starts_at();
    let attendees: HashSet<UserId> = event.attendees();
    let room: &Room = rooms.get(room_id).ok_or(CoreError::RoomNotFound(room_id))?;
    if room.booking_at(starts_at).is_none() {
        return Err(CoreError::Domain(
            atrium_domain::DomainError::BookingNotFound { starts_at },
        ));
    }

    for attendee in attendees {
        if users.get(attendee).is_some() {
            users.remove_event_from_user(attendee, event_id)?;
        }
    }
    users.purge_event_interest(event_id);
    rooms.unbook(room_id, starts_at)?;
    events.remove(event_id)?;
    Ok(())
}

/// Changes an event's capacity.
///
/// The room is read, never written: the new capacity must still fit the
/// room, and must not drop below the current attendee count.
///
/// # Errors
///
/// Returns `EventNotFound`, `RoomNotFound`, `RoomCapacityExceeded`,
/// `InvalidEventParams` (wrapped), or `CapacityBelowAttendees` (wrapped).
pub fn change_capacity(
    rooms: &RoomCatalog,
    events: &mut EventRegistry,
    event_id: EventId,
    capacity: u32,
) -> Result<(), CoreError> {
    let event: &Event = events.require(event_id)?;
    let room_id: RoomId = event.room_id();
    let room: &Room = rooms.get(room_id).ok_or(CoreError::RoomNotFound(room_id))?;
    if capacity > room.capacity() {
        return Err(CoreError::RoomCapacityExceeded {
            room_capacity: room.capacity(),
            requested: capacity,
        });
    }
    events.set_capacity(event_id, capacity)
}

/// Checks the ±60-minute speaker rule: the speaker already has an
/// engagement whose start instant lies strictly within the window around
/// `starts_at`.
///
/// This is a start-instant rule, deliberately distinct from interval
/// overlap.
#[must_use]
pub fn speaker_has_conflict(
    events: &EventRegistry,
    speaker_id: UserId,
    starts_at: NaiveDateTime,
) -> bool {
    events.iter().any(|event| {
        event.has_speaker(speaker_id)
            && (starts_at - event.starts_at()).num_minutes().abs()
                < SPEAKER_CONFLICT_WINDOW_MINUTES
    })
}

/// Enqueues a direct message to every VIP whose favourite speakers include
/// one of the newly scheduled speakers.
///
/// Failures are swallowed: notification is a one-way hook and never undoes
/// or blocks the scheduling work that triggered it.
fn notify_vips(
    events: &EventRegistry,
    users: &mut UserDirectory,
    board: &mut MessageBoard,
    sender: UserId,
    event_id: EventId,
    scheduled: &[UserId],
) {
    let Some(event) = events.get(event_id) else {
        return;
    };
    let event_line: String = event.to_string();

    let mut notifications: Vec<(UserId, UserId)> = Vec::new();
    for vip in users.vips() {
        for speaker_id in scheduled {
            if users.is_favourite_speaker(vip.id(), *speaker_id) {
                notifications.push((vip.id(), *speaker_id));
            }
        }
    }

    for (vip_id, speaker_id) in notifications {
        let speaker_name: String = users
            .get(speaker_id)
            .map_or_else(|| speaker_id.to_string(), |user| user.name().to_owned());
        let body: String = format!(
            "There is a new event created with one of your favourite speakers, {speaker_name}.\n\
             The event details are as follows:\n{event_line}"
        );
        let _ = board.send_new(
            users,
            ConversationKind::Direct,
            sender,
            &[vip_id],
            None,
            local_now(),
            body,
        );
    }
}
