// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::scheduling::create_event;
use crate::signup::{cancel_spot, sign_up};
use crate::tests::helpers::{at, create_test_room, create_test_stores, create_test_user, new_event_request};
use crate::{CoreError, NewEvent};
use atrium_domain::{EventId, UserId, UserRole};
use std::collections::HashSet;

#[test]
fn test_sign_up_and_cancel_round_trip() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let room_id = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);
    let attendee = create_test_user(&mut users, "Uma", UserRole::Attendee);

    let event_id = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(room_id, at(9, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;

    sign_up(&rooms, &mut events, &mut users, attendee, event_id).unwrap();
    assert!(events.is_user_signed_up(attendee, event_id).unwrap());
    assert_eq!(users.events_of(attendee).unwrap(), vec![event_id]);

    cancel_spot(&mut events, &mut users, attendee, event_id).unwrap();
    assert!(!events.is_user_signed_up(attendee, event_id).unwrap());
    assert!(users.events_of(attendee).unwrap().is_empty());
}

#[test]
fn test_cancel_spot_is_idempotent() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let room_id = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);
    let attendee = create_test_user(&mut users, "Uma", UserRole::Attendee);

    let event_id = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(room_id, at(9, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;

    // Never enrolled: a no-op, not an error.
    cancel_spot(&mut events, &mut users, attendee, event_id).unwrap();

    sign_up(&rooms, &mut events, &mut users, attendee, event_id).unwrap();
    cancel_spot(&mut events, &mut users, attendee, event_id).unwrap();
    cancel_spot(&mut events, &mut users, attendee, event_id).unwrap();
    assert!(users.events_of(attendee).unwrap().is_empty());
}

#[test]
fn test_sign_up_rejects_full_event() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let room_id = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);

    let event_id = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(room_id, at(9, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;

    for name in ["Uma", "Vik"] {
        let attendee = create_test_user(&mut users, name, UserRole::Attendee);
        sign_up(&rooms, &mut events, &mut users, attendee, event_id).unwrap();
    }
    let third = create_test_user(&mut users, "Wes", UserRole::Attendee);
    assert_eq!(
        sign_up(&rooms, &mut events, &mut users, third, event_id).unwrap_err(),
        CoreError::EventFull { capacity: 2 }
    );
    assert!(users.events_of(third).unwrap().is_empty());
}

#[test]
fn test_sign_up_rejects_duplicate() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let room_id = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);
    let attendee = create_test_user(&mut users, "Uma", UserRole::Attendee);

    let event_id = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(room_id, at(9, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;

    sign_up(&rooms, &mut events, &mut users, attendee, event_id).unwrap();
    assert_eq!(
        sign_up(&rooms, &mut events, &mut users, attendee, event_id).unwrap_err(),
        CoreError::DuplicateMembership { user_id: attendee }
    );
    assert_eq!(users.events_of(attendee).unwrap().len(), 1);
}

#[test]
fn test_sign_up_rejects_overlapping_interval() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let first_room = create_test_room(&mut rooms);
    let second_room = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);
    let attendee = create_test_user(&mut users, "Uma", UserRole::Attendee);

    let mut request: NewEvent = new_event_request(first_room, at(10, 0), HashSet::new());
    request.duration_hours = 2;
    let long_event = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        request,
    )
    .unwrap()
    .event_id;
    let inside = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(second_room, at(11, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;
    let after = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(second_room, at(12, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;

    sign_up(&rooms, &mut events, &mut users, attendee, long_event).unwrap();
    assert_eq!(
        sign_up(&rooms, &mut events, &mut users, attendee, inside).unwrap_err(),
        CoreError::ScheduleConflict {
            conflicting_event: long_event,
        }
    );
    // Back-to-back is not an overlap.
    sign_up(&rooms, &mut events, &mut users, attendee, after).unwrap();
}

#[test]
fn test_sign_up_reports_missing_ids() {
    let (mut rooms, mut events, mut users, mut board) = create_test_stores();
    let room_id = create_test_room(&mut rooms);
    let organizer = create_test_user(&mut users, "Olive", UserRole::Organizer);
    let attendee = create_test_user(&mut users, "Uma", UserRole::Attendee);

    let ghost_event: EventId = EventId::new();
    assert_eq!(
        sign_up(&rooms, &mut events, &mut users, attendee, ghost_event).unwrap_err(),
        CoreError::EventNotFound(ghost_event)
    );
    assert_eq!(
        cancel_spot(&mut events, &mut users, attendee, ghost_event).unwrap_err(),
        CoreError::EventNotFound(ghost_event)
    );

    let event_id = create_event(
        &mut rooms,
        &mut events,
        &mut users,
        &mut board,
        organizer,
        new_event_request(room_id, at(9, 0), HashSet::new()),
    )
    .unwrap()
    .event_id;
    let ghost_user: UserId = UserId::new();
    assert_eq!(
        sign_up(&rooms, &mut events, &mut users, ghost_user, event_id).unwrap_err(),
        CoreError::UserNotFound(ghost_user)
    );
}
