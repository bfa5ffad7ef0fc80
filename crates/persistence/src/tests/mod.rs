// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

use crate::{DataSet, FileStore, LoadOutcome, PersistenceError, ROOMS_FILE};
use atrium_domain::{
    Conversation, ConversationKind, Event, Room, RoomFeature, User, UserRequest, UserRole,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::PathBuf;

fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("atrium-{label}-{}", uuid::Uuid::new_v4()))
}

fn sample_data() -> DataSet {
    let mut room: Room = Room::new(String::from("Main Hall"), 10, 9, 21).unwrap();
    room.add_feature(RoomFeature::ConferenceSetup);

    let starts_at = NaiveDate::from_ymd_opt(2020, 12, 31)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let mut event: Event = Event::new(
        String::from("Vaccines"),
        starts_at,
        room.id(),
        2,
        1,
        BTreeSet::from([RoomFeature::ConferenceSetup]),
    )
    .unwrap();
    room.book(starts_at, 1, event.id()).unwrap();

    let mut organizer: User = User::new(
        String::from("Olive"),
        String::from("olive@conference.org"),
        String::from("pw"),
        UserRole::Organizer,
    );
    let mut vip: User = User::new(
        String::from("Vera"),
        String::from("vera@conference.org"),
        String::from("pw"),
        UserRole::Vip,
    );
    event.add_attendee(vip.id());
    vip.add_event(event.id());
    vip.vip_profile_mut()
        .unwrap()
        .interested_events
        .insert(event.id());

    let mut conversation: Conversation = Conversation::new(
        ConversationKind::Direct,
        vec![organizer.id(), vip.id()],
        None,
    );
    conversation.push_message(organizer.id(), starts_at, String::from("welcome"));
    organizer.add_conversation(conversation.id());
    vip.add_conversation(conversation.id());

    let request: UserRequest = UserRequest::new(vip.id(), String::from("front-row seat"));

    DataSet {
        conversations: vec![conversation],
        events: [(event.id(), event)].into(),
        rooms: [(room.id(), room)].into(),
        users: vec![organizer, vip],
        user_requests: vec![request],
    }
}

#[test]
fn test_save_then_load_round_trips() {
    let dir: PathBuf = scratch_dir("roundtrip");
    let store: FileStore = FileStore::new(dir.clone());
    let data: DataSet = sample_data();

    store.save(&data).unwrap();
    let outcome: LoadOutcome = store.load().unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(data));

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_missing_directory_loads_fresh() {
    let store: FileStore = FileStore::new(scratch_dir("fresh"));
    assert_eq!(store.load().unwrap(), LoadOutcome::Fresh);
}

#[test]
fn test_partial_state_is_rejected() {
    let dir: PathBuf = scratch_dir("partial");
    let store: FileStore = FileStore::new(dir.clone());
    store.save(&sample_data()).unwrap();
    std::fs::remove_file(dir.join(ROOMS_FILE)).unwrap();

    let err: PersistenceError = store.load().unwrap_err();
    match err {
        PersistenceError::PartialState { present, missing } => {
            assert_eq!(present.len(), 4);
            assert_eq!(missing, vec![ROOMS_FILE.to_owned()]);
        }
        other => panic!("expected PartialState, got {other}"),
    }

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_corrupt_container_is_reported() {
    let dir: PathBuf = scratch_dir("corrupt");
    let store: FileStore = FileStore::new(dir.clone());
    store.save(&sample_data()).unwrap();
    std::fs::write(dir.join(ROOMS_FILE), "not json").unwrap();

    assert!(matches!(
        store.load().unwrap_err(),
        PersistenceError::Serialization { .. }
    ));

    std::fs::remove_dir_all(dir).unwrap();
}
