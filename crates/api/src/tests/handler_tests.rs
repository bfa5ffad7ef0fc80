// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers;
use crate::options::UserOption;
use crate::request_response::CreateEventRequest;
use crate::tests::helpers::{
    add_room, at, create_event_request, create_room_request, create_user_request, login_as,
    organizer_state,
};
use atrium_domain::{RoomFeature, UserRole};
use std::collections::HashSet;

#[test]
fn test_create_room_requires_organizer() {
    let (mut state, organizer_session, _) = organizer_state();
    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);

    let err = handlers::create_room(&mut state, &attendee_session, create_room_request())
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            option: UserOption::AddRooms
        }
    );

    let response =
        handlers::create_room(&mut state, &organizer_session, create_room_request()).unwrap();
    assert_eq!(response.message, "Room created.");
    assert!(state.rooms.get(response.room_id).is_some());
}

#[test]
fn test_toggle_room_feature_flips() {
    let (mut state, session, _) = organizer_state();
    let room_id = add_room(&mut state);

    let message =
        handlers::toggle_room_feature(&mut state, &session, room_id, "stage").unwrap();
    assert_eq!(message, "Feature added to room.");
    assert!(state.rooms.has_feature(room_id, RoomFeature::Stage).unwrap());

    let message =
        handlers::toggle_room_feature(&mut state, &session, room_id, "Stage").unwrap();
    assert_eq!(message, "Feature removed from room.");

    assert!(
        handlers::toggle_room_feature(&mut state, &session, room_id, "jacuzzi").is_err()
    );
}

#[test]
fn test_create_event_reports_partial_speakers() {
    let (mut state, session, _) = organizer_state();
    let first_room = add_room(&mut state);
    let second_room = add_room(&mut state);
    let speaker = state
        .users
        .create_user(
            String::from("Sam"),
            String::from("sam@conference.org"),
            String::from("pw"),
            UserRole::Speaker,
        )
        .unwrap();

    let mut request: CreateEventRequest = create_event_request(first_room, 9);
    request.speaker_ids = HashSet::from([speaker]);
    let response = handlers::create_event(&mut state, &session, request).unwrap();
    assert_eq!(response.message, "Event Successfully Added.");
    assert!(response.skipped_speakers.is_empty());

    let mut request: CreateEventRequest = create_event_request(second_room, 9);
    request.name = String::from("Robot");
    request.speaker_ids = HashSet::from([speaker]);
    let response = handlers::create_event(&mut state, &session, request).unwrap();
    assert_eq!(response.skipped_speakers, vec![speaker]);
    assert!(response.message.starts_with("Event Successfully Added."));
    assert!(response.message.contains("schedule conflict"));
}

#[test]
fn test_create_event_room_conflict_message() {
    let (mut state, session, _) = organizer_state();
    let room_id = add_room(&mut state);
    handlers::create_event(&mut state, &session, create_event_request(room_id, 9)).unwrap();

    let mut request: CreateEventRequest = create_event_request(room_id, 9);
    request.name = String::from("Serum");
    let err = handlers::create_event(&mut state, &session, request).unwrap_err();
    assert!(matches!(err, ApiError::RuleViolation { ref message }
        if message.contains("may not be available")));
}

#[test]
fn test_create_party_strips_speakers() {
    let (mut state, _, _) = organizer_state();
    let room_id = add_room(&mut state);
    let (vip_session, _) = login_as(&mut state, "Vera", UserRole::Vip);
    let speaker = state
        .users
        .create_user(
            String::from("Sam"),
            String::from("sam@conference.org"),
            String::from("pw"),
            UserRole::Speaker,
        )
        .unwrap();

    let mut request: CreateEventRequest = create_event_request(room_id, 9);
    request.speaker_ids = HashSet::from([speaker]);
    let response = handlers::create_party(&mut state, &vip_session, request).unwrap();
    let event = state.events.require(response.event_id).unwrap();
    assert_eq!(event.kind(), atrium_domain::EventKind::Party);
    assert!(event.speakers().is_empty());
}

#[test]
fn test_sign_up_and_cancel_messages() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let response = handlers::create_event(
        &mut state,
        &organizer_session,
        create_event_request(room_id, 9),
    )
    .unwrap();
    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);

    let message =
        handlers::sign_up(&mut state, &attendee_session, response.event_id).unwrap();
    assert_eq!(message, "You've signed up to the event successfully.");

    let err = handlers::sign_up(&mut state, &attendee_session, response.event_id).unwrap_err();
    assert!(matches!(err, ApiError::RuleViolation { ref message }
        if message.contains("Sign up was unsuccessful")));

    let message =
        handlers::cancel_spot(&mut state, &attendee_session, response.event_id).unwrap();
    assert_eq!(message, "You've disenrolled from the event successfully.");
}

#[test]
fn test_change_capacity_messages() {
    let (mut state, session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let event_id = handlers::create_event(&mut state, &session, create_event_request(room_id, 9))
        .unwrap()
        .event_id;

    let message = handlers::change_capacity(&mut state, &session, event_id, 5).unwrap();
    assert_eq!(message, "The event's capacity has been set to 5.");

    for name in ["Uma", "Vik"] {
        let (attendee_session, _) = login_as(&mut state, name, UserRole::Attendee);
        handlers::sign_up(&mut state, &attendee_session, event_id).unwrap();
    }
    let err = handlers::change_capacity(&mut state, &session, event_id, 1).unwrap_err();
    assert!(matches!(err, ApiError::RuleViolation { ref message }
        if message.contains("exceeds the given capacity")));
}

#[test]
fn test_event_views_and_cancel() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let morning = handlers::create_event(
        &mut state,
        &organizer_session,
        create_event_request(room_id, 9),
    )
    .unwrap()
    .event_id;
    let mut request: CreateEventRequest = create_event_request(room_id, 14);
    request.name = String::from("Serum");
    let afternoon = handlers::create_event(&mut state, &organizer_session, request)
        .unwrap()
        .event_id;

    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);
    handlers::sign_up(&mut state, &attendee_session, morning).unwrap();

    let all = handlers::list_all_events(&state, &attendee_session).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].line.contains("Room: R1"));

    let signed_up = handlers::list_signed_up_events(&state, &attendee_session).unwrap();
    assert_eq!(signed_up.len(), 1);
    assert_eq!(signed_up[0].event_id, morning);

    // The morning event's instant now clashes with the attendee's own
    // sign-up, so only the afternoon event remains available.
    let available = handlers::list_available_events(&state, &attendee_session).unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].event_id, afternoon);

    let by_day =
        handlers::list_events_by_day(&state, &attendee_session, at(9).date()).unwrap();
    assert_eq!(by_day.len(), 2);

    handlers::cancel_event(&mut state, &organizer_session, morning).unwrap();
    let all = handlers::list_all_events(&state, &attendee_session).unwrap();
    assert_eq!(all.len(), 1);
    assert!(
        state
            .users
            .events_of(state.users.find_by_email("uma@conference.org").unwrap().id())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_guest_can_view_but_not_sign_up() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let event_id = handlers::create_event(
        &mut state,
        &organizer_session,
        create_event_request(room_id, 9),
    )
    .unwrap()
    .event_id;

    let mut guest_session = crate::Session::new();
    guest_session.login_as_guest();

    assert!(handlers::list_all_events(&state, &guest_session).is_ok());
    let err = handlers::sign_up(&mut state, &guest_session, event_id).unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            option: UserOption::SignUpForEvent
        }
    );
}

#[test]
fn test_create_user_and_change_role() {
    let (mut state, session, _) = organizer_state();

    let response = handlers::create_user(
        &mut state,
        &session,
        create_user_request("Sam", UserRole::Speaker),
    )
    .unwrap();
    assert_eq!(response.message, "Speaker user account was created.");

    let err = handlers::create_user(
        &mut state,
        &session,
        create_user_request("Sam", UserRole::Attendee),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::RuleViolation { ref message }
        if message.contains("already registered")));

    let message = handlers::change_user_role(
        &mut state,
        &session,
        "sam@conference.org",
        "pw",
        UserRole::Vip,
    )
    .unwrap();
    assert_eq!(message, "User type was set to VIP.");
    assert_eq!(
        state
            .users
            .find_by_email("sam@conference.org")
            .unwrap()
            .role(),
        UserRole::Vip
    );

    assert!(matches!(
        handlers::change_user_role(&mut state, &session, "sam@conference.org", "bad", UserRole::Attendee),
        Err(ApiError::AuthenticationFailed { .. })
    ));
    assert!(matches!(
        handlers::change_user_role(&mut state, &session, "nobody@conference.org", "pw", UserRole::Attendee),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_requests_lifecycle() {
    let (mut state, organizer_session, _) = organizer_state();
    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);

    let message = handlers::file_request(
        &mut state,
        &attendee_session,
        String::from("Vegetarian lunch, please"),
    )
    .unwrap();
    assert_eq!(message, "Your request has been filed.");

    // Attendees cannot list requests.
    assert!(handlers::list_requests(&state, &attendee_session).is_err());

    let pending = handlers::list_requests(&state, &organizer_session).unwrap();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].line.contains("Uma"));

    handlers::address_request(&mut state, &organizer_session, pending[0].request_id).unwrap();
    assert!(handlers::list_requests(&state, &organizer_session)
        .unwrap()
        .is_empty());
}

#[test]
fn test_vip_interests_and_favourites() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let event_id = handlers::create_event(
        &mut state,
        &organizer_session,
        create_event_request(room_id, 9),
    )
    .unwrap()
    .event_id;
    let speaker = state
        .users
        .create_user(
            String::from("Sam"),
            String::from("sam@conference.org"),
            String::from("pw"),
            UserRole::Speaker,
        )
        .unwrap();
    let (vip_session, _) = login_as(&mut state, "Vera", UserRole::Vip);

    handlers::interested_in_event(&mut state, &vip_session, event_id).unwrap();
    assert_eq!(
        handlers::list_interested_events(&state, &vip_session)
            .unwrap()
            .len(),
        1
    );
    // Pure remove, idempotent.
    handlers::uninterested_in_event(&mut state, &vip_session, event_id).unwrap();
    handlers::uninterested_in_event(&mut state, &vip_session, event_id).unwrap();
    assert!(handlers::list_interested_events(&state, &vip_session)
        .unwrap()
        .is_empty());

    handlers::like_speaker(&mut state, &vip_session, speaker).unwrap();
    assert_eq!(
        handlers::list_favourite_speakers(&state, &vip_session)
            .unwrap()
            .len(),
        1
    );
    handlers::dislike_speaker(&mut state, &vip_session, speaker).unwrap();
    assert!(handlers::list_favourite_speakers(&state, &vip_session)
        .unwrap()
        .is_empty());

    // Attendees hold no VIP options.
    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);
    assert!(handlers::interested_in_event(&mut state, &attendee_session, event_id).is_err());
}

#[test]
fn test_speaker_views() {
    let (mut state, organizer_session, _) = organizer_state();
    let room_id = add_room(&mut state);
    let (speaker_session, speaker) = login_as(&mut state, "Sam", UserRole::Speaker);

    let mut request: CreateEventRequest = create_event_request(room_id, 9);
    request.speaker_ids = HashSet::from([speaker]);
    let event_id = handlers::create_event(&mut state, &organizer_session, request)
        .unwrap()
        .event_id;
    let (attendee_session, _) = login_as(&mut state, "Uma", UserRole::Attendee);
    handlers::sign_up(&mut state, &attendee_session, event_id).unwrap();

    let talks = handlers::list_scheduled_talks(&state, &speaker_session).unwrap();
    assert_eq!(talks.len(), 1);

    let attendees = handlers::list_talk_attendees(&state, &speaker_session, event_id).unwrap();
    assert_eq!(attendees.len(), 1);
    assert!(attendees[0].line.contains("Uma"));

    // Another speaker cannot inspect this talk's attendees.
    let (other_session, _) = login_as(&mut state, "Tess", UserRole::Speaker);
    assert!(handlers::list_talk_attendees(&state, &other_session, event_id).is_err());
}

#[test]
fn test_stats_summarizes() {
    let (mut state, session, _) = organizer_state();
    let room_id = add_room(&mut state);
    handlers::create_event(&mut state, &session, create_event_request(room_id, 9)).unwrap();

    let output = handlers::stats(&state, &session).unwrap();
    assert!(output.contains("Rooms: 1"));
    assert!(output.contains("1 parties"));
}
