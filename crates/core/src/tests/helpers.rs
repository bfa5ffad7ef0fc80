// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::scheduling::NewEvent;
use crate::{EventRegistry, MessageBoard, RoomCatalog, UserDirectory};
use atrium_domain::{RoomFeature, RoomId, UserId, UserRole};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashSet};

/// 31/12/2020 at the given hour and minute.
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 12, 31)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn create_test_stores() -> (RoomCatalog, EventRegistry, UserDirectory, MessageBoard) {
    (
        RoomCatalog::new(),
        EventRegistry::new(),
        UserDirectory::new(),
        MessageBoard::new(),
    )
}

/// A capacity-10 room open 9 to 21 with a conference setup.
pub fn create_test_room(rooms: &mut RoomCatalog) -> RoomId {
    let room_id: RoomId = rooms
        .create_room(String::from("R1"), 10, 9, 21)
        .unwrap();
    rooms
        .add_feature(room_id, RoomFeature::ConferenceSetup)
        .unwrap();
    room_id
}

pub fn create_test_user(users: &mut UserDirectory, name: &str, role: UserRole) -> UserId {
    users
        .create_user(
            name.to_owned(),
            format!("{}@conference.org", name.to_lowercase()),
            String::from("pw"),
            role,
        )
        .unwrap()
}

/// A one-hour capacity-2 event request for the given room and start time.
pub fn new_event_request(
    room_id: RoomId,
    starts_at: NaiveDateTime,
    speakers: HashSet<UserId>,
) -> NewEvent {
    NewEvent {
        name: String::from("Vaccines"),
        starts_at,
        room_id,
        proposed_speakers: speakers,
        capacity: 2,
        duration_hours: 1,
        features: BTreeSet::from([RoomFeature::ConferenceSetup]),
    }
}
