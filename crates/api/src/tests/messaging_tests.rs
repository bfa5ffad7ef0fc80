// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::CreateEventRequest;
use crate::tests::helpers::{add_room, create_event_request, login_as, organizer_state};
use atrium_domain::UserRole;
use std::collections::HashSet;

#[test]
fn test_attendees_need_mutual_friendship() {
    let (mut state, _, _) = organizer_state();
    let (ana_session, ana) = login_as(&mut state, "Ana", UserRole::Attendee);
    let (ben_session, ben) = login_as(&mut state, "Ben", UserRole::Attendee);

    let err = handlers::send_direct_message(
        &mut state,
        &ana_session,
        &[ben],
        String::from("hello"),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::RuleViolation { ref message }
        if message.contains("friends")));

    handlers::add_friend(&mut state, &ana_session, "ben@conference.org").unwrap();
    // One-sided friendship is still not enough.
    assert!(
        handlers::send_direct_message(&mut state, &ana_session, &[ben], String::from("hello"))
            .is_err()
    );

    handlers::add_friend(&mut state, &ben_session, "ana@conference.org").unwrap();
    let message =
        handlers::send_direct_message(&mut state, &ana_session, &[ben], String::from("hello"))
            .unwrap();
    assert_eq!(message, "Message Sent");

    let conversations = handlers::list_conversations(&state, &ben_session).unwrap();
    assert_eq!(conversations.len(), 1);
    assert!(conversations[0].line.starts_with("[Unread]"));
    assert!(conversations[0].line.contains("Ana"));

    let transcript = handlers::view_conversation(&mut state, &ben_session, 1).unwrap();
    assert!(transcript.contains("Ana"));
    assert!(transcript.contains("hello"));
    let conversations = handlers::list_conversations(&state, &ben_session).unwrap();
    assert!(!conversations[0].line.starts_with("[Unread]"));

    handlers::reply_to_conversation(&mut state, &ben_session, 1, String::from("hi"))
        .unwrap();
    let conversations = handlers::list_conversations(&state, &ana_session).unwrap();
    assert!(conversations[0].line.starts_with("[Unread]"));
    let _ = ana;
}

#[test]
fn test_organizer_messages_freely_and_broadcasts() {
    let (mut state, organizer_session, _) = organizer_state();
    let (_, uma) = login_as(&mut state, "Uma", UserRole::Attendee);
    let (_, vik) = login_as(&mut state, "Vik", UserRole::Attendee);

    // No friendship required for organizers.
    handlers::send_direct_message(
        &mut state,
        &organizer_session,
        &[uma],
        String::from("welcome"),
    )
    .unwrap();

    handlers::message_all(
        &mut state,
        &organizer_session,
        UserRole::Attendee,
        String::from("doors open at nine"),
    )
    .unwrap();
    for attendee in [uma, vik] {
        let unread = state.users.require(attendee).unwrap().unread_conversations();
        assert!(!unread.is_empty());
    }

    assert!(matches!(
        handlers::message_all(
            &mut state,
            &organizer_session,
            UserRole::Organizer,
            String::from("nope"),
        ),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_speaker_messages_talk_attendees() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let (speaker_session, speaker) = login_as(&mut state, "Sam", UserRole::Speaker);
    let mut request: CreateEventRequest = create_event_request(room_id, 9);
    request.speaker_ids = HashSet::from([speaker]);
    let event_id = handlers::create_event(&mut state, &organizer_session, request)
        .unwrap()
        .event_id;

    // Nobody signed up yet.
    assert!(
        handlers::message_event_attendees(
            &mut state,
            &speaker_session,
            event_id,
            String::from("see you soon"),
        )
        .is_err()
    );

    let (attendee_session, attendee) = login_as(&mut state, "Uma", UserRole::Attendee);
    handlers::sign_up(&mut state, &attendee_session, event_id).unwrap();
    handlers::message_event_attendees(
        &mut state,
        &speaker_session,
        event_id,
        String::from("see you soon"),
    )
    .unwrap();

    let conversations = handlers::list_conversations(&state, &attendee_session).unwrap();
    assert_eq!(conversations.len(), 1);
    assert!(conversations[0].line.contains("Vaccines"));
    let _ = attendee;

    // A speaker not on the event cannot message its attendees.
    let (other_session, _) = login_as(&mut state, "Tess", UserRole::Speaker);
    assert!(
        handlers::message_event_attendees(
            &mut state,
            &other_session,
            event_id,
            String::from("hi"),
        )
        .is_err()
    );
}

#[test]
fn test_friend_list_round_trip() {
    let (mut state, _, _) = organizer_state();
    let (ana_session, _) = login_as(&mut state, "Ana", UserRole::Attendee);
    let (_, _) = login_as(&mut state, "Ben", UserRole::Attendee);

    assert!(matches!(
        handlers::add_friend(&mut state, &ana_session, "nobody@conference.org"),
        Err(ApiError::ResourceNotFound { .. })
    ));

    handlers::add_friend(&mut state, &ana_session, "ben@conference.org").unwrap();
    assert!(handlers::add_friend(&mut state, &ana_session, "ben@conference.org").is_err());
    assert_eq!(handlers::list_friends(&state, &ana_session).unwrap().len(), 1);

    handlers::remove_friend(&mut state, &ana_session, "ben@conference.org").unwrap();
    assert!(handlers::list_friends(&state, &ana_session).unwrap().is_empty());
    assert!(handlers::remove_friend(&mut state, &ana_session, "ben@conference.org").is_err());
}
