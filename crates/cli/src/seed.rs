// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data for a fresh start, mirroring what the saved containers would
//! hold after a small conference was set up.

use atrium_api::{AppState, CreateEventRequest, Session, handlers};
use atrium_domain::{RoomFeature, RoomId, UserId, UserRole};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};
use tracing::info;

/// Fills an empty state with demo users, a room, and a day of events.
pub fn populate(state: &mut AppState) {
    let accounts: [(&str, &str, &str, UserRole); 5] = [
        ("Organizer1", "organizer1@conference.com", "organizer1", UserRole::Organizer),
        ("Attendee1", "attendee1@conference.com", "attendee1", UserRole::Attendee),
        ("Attendee2", "attendee2@conference.com", "attendee2", UserRole::Attendee),
        ("Speaker1", "speaker1@conference.com", "speaker1", UserRole::Speaker),
        ("Vip1", "vip1@conference.com", "vip1", UserRole::Vip),
    ];
    let mut ids: Vec<UserId> = Vec::new();
    for (name, email, password, role) in accounts {
        if let Ok(user_id) = state.users.create_user(
            name.to_owned(),
            email.to_owned(),
            password.to_owned(),
            role,
        ) {
            ids.push(user_id);
        }
    }
    // Attendee1 and Attendee2 have added each other, so they can message.
    if let [_, first, second, speaker, vip, ..] = ids[..] {
        if let Ok(user) = state.users.require_mut(first) {
            user.add_friend(second);
        }
        if let Ok(user) = state.users.require_mut(second) {
            user.add_friend(first);
        }
        let _ = state.users.like_speaker(vip, speaker);
    }

    let Ok(room_id) = state
        .rooms
        .create_room(String::from("Main Conference Room"), 10, 9, 21)
    else {
        return;
    };
    let _ = state
        .rooms
        .add_feature(room_id, RoomFeature::ConferenceSetup);

    seed_events(state, room_id);
    info!(
        users = state.users.len(),
        events = state.events.len(),
        "demo data seeded"
    );
}

fn seed_events(state: &mut AppState, room_id: RoomId) {
    let mut session: Session = Session::new();
    if session
        .login(&state.users, "organizer1@conference.com", "organizer1")
        .is_err()
    {
        return;
    }
    let speaker: HashSet<UserId> = state
        .users
        .find_by_email("speaker1@conference.com")
        .map(|user| HashSet::from([user.id()]))
        .unwrap_or_default();

    let day = NaiveDate::from_ymd_opt(2020, 12, 31);
    let schedule: [(&str, u32, u32); 5] = [
        ("Possible Vaccines For Coronavirus", 9, 2),
        ("Serum Of Immortality", 10, 3),
        ("Self-Sustainable House-Cleaning Robot", 11, 4),
        ("Why Normal People Can't Purchase RTX 3090", 12, 5),
        ("Concerns Over Legalization Of Recreational Drug Use In Oregon", 13, 6),
    ];
    for (name, hour, capacity) in schedule {
        let Some(starts_at) = day.and_then(|date| date.and_hms_opt(hour, 0, 0)) else {
            continue;
        };
        let _ = handlers::create_event(
            state,
            &session,
            CreateEventRequest {
                name: name.to_owned(),
                starts_at,
                room_id,
                speaker_ids: speaker.clone(),
                capacity,
                duration_hours: 1,
                features: BTreeSet::from([RoomFeature::ConferenceSetup]),
            },
        );
    }
}
