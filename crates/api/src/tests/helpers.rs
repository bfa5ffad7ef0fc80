// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{CreateEventRequest, CreateRoomRequest, CreateUserRequest};
use crate::session::Session;
use crate::state::AppState;
use atrium_domain::{RoomFeature, RoomId, UserId, UserRole};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashSet};

/// 31/12/2020 at the given hour.
pub fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 12, 31)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// An empty state with one organizer account and a session logged in as
/// them.
pub fn organizer_state() -> (AppState, Session, UserId) {
    let mut state: AppState = AppState::new();
    let organizer: UserId = state
        .users
        .create_user(
            String::from("Olive"),
            String::from("olive@conference.org"),
            String::from("pw"),
            UserRole::Organizer,
        )
        .unwrap();
    let mut session: Session = Session::new();
    session
        .login(&state.users, "olive@conference.org", "pw")
        .unwrap();
    (state, session, organizer)
}

/// Adds a user of the given role and returns a session logged in as them.
pub fn login_as(state: &mut AppState, name: &str, role: UserRole) -> (Session, UserId) {
    let email: String = format!("{}@conference.org", name.to_lowercase());
    let user_id: UserId = state
        .users
        .create_user(name.to_owned(), email.clone(), String::from("pw"), role)
        .unwrap();
    let mut session: Session = Session::new();
    session.login(&state.users, &email, "pw").unwrap();
    (session, user_id)
}

/// A capacity-10 conference room open 9 to 21.
pub fn add_room(state: &mut AppState) -> RoomId {
    let room_id: RoomId = state
        .rooms
        .create_room(String::from("R1"), 10, 9, 21)
        .unwrap();
    state
        .rooms
        .add_feature(room_id, RoomFeature::ConferenceSetup)
        .unwrap();
    room_id
}

pub fn create_room_request() -> CreateRoomRequest {
    CreateRoomRequest {
        name: String::from("Hall"),
        capacity: 10,
        open_hour: 9,
        close_hour: 21,
    }
}

pub fn create_event_request(room_id: RoomId, hour: u32) -> CreateEventRequest {
    CreateEventRequest {
        name: String::from("Vaccines"),
        starts_at: at(hour),
        room_id,
        speaker_ids: HashSet::new(),
        capacity: 2,
        duration_hours: 1,
        features: BTreeSet::from([RoomFeature::ConferenceSetup]),
    }
}

pub fn create_user_request(name: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_owned(),
        email: format!("{}@conference.org", name.to_lowercase()),
        password: String::from("pw"),
        role,
    }
}
