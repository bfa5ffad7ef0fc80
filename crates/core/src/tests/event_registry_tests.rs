// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::at;
use crate::{CoreError, EventRegistry};
use atrium_domain::{DomainError, EventId, RoomId, UserId};
use std::collections::BTreeSet;

fn registry_with_event(hour: u32) -> (EventRegistry, EventId) {
    let mut events: EventRegistry = EventRegistry::new();
    let event_id: EventId = events
        .create(
            String::from("Vaccines"),
            at(hour, 0),
            RoomId::new(),
            2,
            1,
            BTreeSet::new(),
        )
        .unwrap();
    (events, event_id)
}

#[test]
fn test_create_validates_duration_and_capacity() {
    let mut events: EventRegistry = EventRegistry::new();
    let room_id: RoomId = RoomId::new();
    assert!(
        events
            .create(String::from("A"), at(9, 0), room_id, 2, 0, BTreeSet::new())
            .is_err()
    );
    assert!(
        events
            .create(String::from("A"), at(9, 0), room_id, 2, 24, BTreeSet::new())
            .is_err()
    );
    assert!(
        events
            .create(String::from("A"), at(9, 0), room_id, 0, 1, BTreeSet::new())
            .is_err()
    );
    assert!(events.is_empty());
    assert!(
        events
            .create(String::from("A"), at(9, 0), room_id, 2, 23, BTreeSet::new())
            .is_ok()
    );
}

#[test]
fn test_set_capacity_guards() {
    let (mut events, event_id) = registry_with_event(9);
    events.add_attendee(event_id, UserId::new()).unwrap();
    events.add_attendee(event_id, UserId::new()).unwrap();

    let err: CoreError = events.set_capacity(event_id, 1).unwrap_err();
    assert_eq!(
        err,
        CoreError::Domain(DomainError::CapacityBelowAttendees {
            attendees: 2,
            requested: 1,
        })
    );
    assert!(events.set_capacity(event_id, 0).is_err());
    assert_eq!(events.require(event_id).unwrap().capacity(), 2);

    events.set_capacity(event_id, 4).unwrap();
    assert_eq!(events.require(event_id).unwrap().capacity(), 4);
}

#[test]
fn test_by_day_filters_on_local_date() {
    let mut events: EventRegistry = EventRegistry::new();
    let on_day = events
        .create(
            String::from("A"),
            at(9, 0),
            RoomId::new(),
            2,
            1,
            BTreeSet::new(),
        )
        .unwrap();
    let _other_day = events
        .create(
            String::from("B"),
            at(9, 0) + chrono::Duration::days(1),
            RoomId::new(),
            2,
            1,
            BTreeSet::new(),
        )
        .unwrap();

    let ids = events.by_day(at(9, 0).date());
    assert_eq!(ids, vec![on_day]);
}

#[test]
fn test_by_speaker_lists_only_their_events() {
    let (mut events, first) = registry_with_event(9);
    let second: EventId = events
        .create(
            String::from("Serum"),
            at(14, 0),
            RoomId::new(),
            3,
            1,
            BTreeSet::new(),
        )
        .unwrap();
    let speaker: UserId = UserId::new();
    events.add_speaker(first, speaker).unwrap();
    events.add_speaker(second, UserId::new()).unwrap();

    assert_eq!(events.by_speaker(speaker), vec![first]);
}

#[test]
fn test_no_conflict_compares_exact_instants() {
    let mut events: EventRegistry = EventRegistry::new();
    let nine = events
        .create(
            String::from("Nine"),
            at(9, 0),
            RoomId::new(),
            2,
            2,
            BTreeSet::new(),
        )
        .unwrap();
    let also_nine = events
        .create(
            String::from("Also nine"),
            at(9, 0),
            RoomId::new(),
            2,
            1,
            BTreeSet::new(),
        )
        .unwrap();
    // Overlaps the nine o'clock events but starts at a different instant.
    let ten = events
        .create(
            String::from("Ten"),
            at(10, 0),
            RoomId::new(),
            2,
            1,
            BTreeSet::new(),
        )
        .unwrap();

    let free = events.no_conflict_with(&[nine]);
    assert!(!free.contains(&nine));
    assert!(!free.contains(&also_nine));
    assert!(free.contains(&ten));
}

#[test]
fn test_remove_returns_the_event() {
    let (mut events, event_id) = registry_with_event(9);
    let removed = events.remove(event_id).unwrap();
    assert_eq!(removed.id(), event_id);
    assert!(events.remove(event_id).is_err());
    assert!(events.is_empty());
}

#[test]
fn test_membership_queries_report_missing_event() {
    let events: EventRegistry = EventRegistry::new();
    let ghost: EventId = EventId::new();
    assert_eq!(
        events.is_user_signed_up(UserId::new(), ghost).unwrap_err(),
        CoreError::EventNotFound(ghost)
    );
}
