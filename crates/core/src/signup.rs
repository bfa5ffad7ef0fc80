// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The sign-up service.
//!
//! Moves a user into or out of an event's attendee set under the capacity
//! and conflict rules, keeping the event-side set and the user-side list in
//! lockstep. Preconditions are validated before the first mutation, so each
//! call is all-or-nothing.

use crate::error::CoreError;
use crate::event_registry::EventRegistry;
use crate::room_catalog::RoomCatalog;
use crate::user_directory::UserDirectory;
use atrium_domain::{Event, EventId, Room, RoomId, User, UserId};

/// Signs a user up for an event.
///
/// Succeeds iff the event exists, the event and its room both have a spot
/// left, the user is not already an attendee, and the event's interval does
/// not overlap any event the user already attends.
///
/// # Errors
///
/// Returns `EventNotFound`, `UserNotFound`, `RoomNotFound`, `EventFull`,
/// `DuplicateMembership`, or `ScheduleConflict`; the stores are unchanged
/// on error.
pub fn sign_up(
    rooms: &RoomCatalog,
    events: &mut EventRegistry,
    users: &mut UserDirectory,
    user_id: UserId,
    event_id: EventId,
) -> Result<(), CoreError> {
    let event: &Event = events.require(event_id)?;
    let user: &User = users.require(user_id)?;
    let room_id: RoomId = event.room_id();
    let room: &Room = rooms.get(room_id).ok_or(CoreError::RoomNotFound(room_id))?;

    if event.attendee_count() >= event.capacity() as usize {
        return Err(CoreError::EventFull {
            capacity: event.capacity(),
        });
    }
    if event.attendee_count() >= room.capacity() as usize {
        return Err(CoreError::EventFull {
            capacity: room.capacity(),
        });
    }
    if event.is_user_signed_up(user_id) {
        return Err(CoreError::DuplicateMembership { user_id });
    }
    for attended_id in user.events_signed_up() {
        if let Some(attended) = events.get(attended_id)
            && attended.overlaps(event)
        {
            return Err(CoreError::ScheduleConflict {
                conflicting_event: attended_id,
            });
        }
    }

    events.add_attendee(event_id, user_id)?;
    users.add_event_to_user(user_id, event_id)?;
    Ok(())
}

/// Cancels a user's spot at an event.
///
/// Cancelling a spot the user never held is a no-op.
///
/// # Errors
///
/// Returns `EventNotFound` or `UserNotFound`; the stores are unchanged on
/// error.
pub fn cancel_spot(
    events: &mut EventRegistry,
    users: &mut UserDirectory,
    user_id: UserId,
    event_id: EventId,
) -> Result<(), CoreError> {
    let event: &Event = events.require(event_id)?;
    users.require(user_id)?;
    if !event.is_user_signed_up(user_id) {
        return Ok(());
    }
    events.remove_attendee(event_id, user_id)?;
    users.remove_event_from_user(user_id, event_id)?;
    Ok(())
}
