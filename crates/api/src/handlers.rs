// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler authorizes the session against the role→option mapping,
//! drives the core services, and returns either typed data or a
//! human-readable message. The CLI presents messages verbatim and never
//! sees a core error unshaped.

use crate::error::{ApiError, translate_core_error};
use crate::options::UserOption;
use crate::request_response::{
    ConversationSummary, CreateEventRequest, CreateEventResponse, CreateRoomRequest,
    CreateRoomResponse, CreateUserRequest, CreateUserResponse, EventSummary, RequestSummary,
    RoomSummary, UserSummary,
};
use crate::session::Session;
use crate::state::AppState;
use atrium_core::{CoreError, NewEvent, local_now, scheduling, signup};
use atrium_domain::{
    ConversationKind, Event, EventId, RequestId, RoomFeature, RoomId, User, UserId, UserRole,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use tracing::warn;

fn event_line(state: &AppState, event: &Event) -> String {
    let room_name: String = state
        .rooms
        .get(event.room_id())
        .map_or_else(|| String::from("?"), |room| room.name().to_owned());
    format!("{event} | Room: {room_name}")
}

fn event_summaries(state: &AppState, ids: &[EventId]) -> Vec<EventSummary> {
    let mut summaries: Vec<EventSummary> = ids
        .iter()
        .filter_map(|event_id| state.events.get(*event_id))
        .map(|event| EventSummary {
            event_id: event.id(),
            line: event_line(state, event),
        })
        .collect();
    summaries.sort_by(|a, b| a.line.cmp(&b.line));
    summaries
}

fn user_line(user: &User) -> String {
    format!("{} ({}) - {}", user.name(), user.email(), user.role())
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Creates a room.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers or a rule violation for bad
/// hour/capacity bounds.
pub fn create_room(
    state: &mut AppState,
    session: &Session,
    request: CreateRoomRequest,
) -> Result<CreateRoomResponse, ApiError> {
    session.authorize(UserOption::AddRooms)?;
    let room_id: RoomId = state
        .rooms
        .create_room(
            request.name,
            request.capacity,
            request.open_hour,
            request.close_hour,
        )
        .map_err(translate_core_error)?;
    Ok(CreateRoomResponse {
        room_id,
        message: String::from("Room created."),
    })
}

/// Toggles a feature on a room: present features are removed, absent ones
/// added.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers, `InvalidInput` for an unknown
/// feature name, or `ResourceNotFound` for a missing room.
pub fn toggle_room_feature(
    state: &mut AppState,
    session: &Session,
    room_id: RoomId,
    feature_name: &str,
) -> Result<String, ApiError> {
    session.authorize(UserOption::AddRooms)?;
    let feature: RoomFeature =
        RoomFeature::parse(feature_name).map_err(|_| ApiError::InvalidInput {
            message: String::from("Could not find the corresponding feature"),
        })?;
    let had: bool = state
        .rooms
        .has_feature(room_id, feature)
        .map_err(translate_core_error)?;
    if had {
        state
            .rooms
            .remove_feature(room_id, feature)
            .map_err(translate_core_error)?;
        Ok(String::from("Feature removed from room."))
    } else {
        state
            .rooms
            .add_feature(room_id, feature)
            .map_err(translate_core_error)?;
        Ok(String::from("Feature added to room."))
    }
}

/// Lists every room, in insertion order.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not create events.
pub fn list_rooms(state: &AppState, session: &Session) -> Result<Vec<RoomSummary>, ApiError> {
    session.authorize_view(UserOption::CreateEvent)?;
    Ok(state
        .rooms
        .all_ids()
        .into_iter()
        .filter_map(|room_id| state.rooms.get(room_id))
        .map(|room| RoomSummary {
            room_id: room.id(),
            line: room.to_string(),
        })
        .collect())
}

/// Suggests rooms able to host an event: required features covered, enough
/// capacity, slot free. Stable insertion order, no ranking.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not create events.
pub fn suggest_rooms(
    state: &AppState,
    session: &Session,
    required_features: &BTreeSet<RoomFeature>,
    min_capacity: u32,
    starts_at: NaiveDateTime,
    duration_hours: u8,
) -> Result<Vec<RoomSummary>, ApiError> {
    session.authorize_view(UserOption::CreateEvent)?;
    Ok(state
        .rooms
        .suggest(required_features, min_capacity, starts_at, duration_hours)
        .into_iter()
        .filter_map(|room_id| state.rooms.get(room_id))
        .map(|room| RoomSummary {
            room_id: room.id(),
            line: room.to_string(),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

const EVENT_ADDED: &str = "Event Successfully Added.";
const EVENT_ADDED_PARTIAL: &str = "Event Successfully Added. Some chosen speakers were not \
                                   added because of a schedule conflict with this event.";

/// Creates an event, booking its room and scheduling the non-conflicted
/// speakers.
///
/// # Errors
///
/// Returns `Unauthorized` for roles without the create-event option, or a
/// rule violation for an unavailable room, uncovered features, a capacity
/// above the room's, or bad event parameters.
pub fn create_event(
    state: &mut AppState,
    session: &Session,
    request: CreateEventRequest,
) -> Result<CreateEventResponse, ApiError> {
    let acting: UserId = session.authorize(UserOption::CreateEvent)?;
    create_event_inner(state, acting, request)
}

/// Creates a party: a speakerless event hosted by a VIP.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs, or the same rule violations as
/// event creation.
pub fn create_party(
    state: &mut AppState,
    session: &Session,
    mut request: CreateEventRequest,
) -> Result<CreateEventResponse, ApiError> {
    let acting: UserId = session.authorize(UserOption::CreateParty)?;
    request.speaker_ids.clear();
    create_event_inner(state, acting, request)
}

fn create_event_inner(
    state: &mut AppState,
    acting: UserId,
    request: CreateEventRequest,
) -> Result<CreateEventResponse, ApiError> {
    let created = scheduling::create_event(
        &mut state.rooms,
        &mut state.events,
        &mut state.users,
        &mut state.board,
        acting,
        NewEvent {
            name: request.name,
            starts_at: request.starts_at,
            room_id: request.room_id,
            proposed_speakers: request.speaker_ids,
            capacity: request.capacity,
            duration_hours: request.duration_hours,
            features: request.features,
        },
    )
    .map_err(translate_core_error)?;

    let message: String = if created.skipped_speakers.is_empty() {
        String::from(EVENT_ADDED)
    } else {
        warn!(
            skipped = created.skipped_speakers.len(),
            "speakers skipped at event creation"
        );
        String::from(EVENT_ADDED_PARTIAL)
    };
    Ok(CreateEventResponse {
        event_id: created.event_id,
        skipped_speakers: created.skipped_speakers,
        message,
    })
}

/// Schedules a speaker into an event.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers, or a rule violation when the
/// speaker already speaks there or the ±60-minute rule fires.
pub fn schedule_speaker(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
    speaker_id: UserId,
) -> Result<String, ApiError> {
    session.authorize(UserOption::ScheduleSpeakerTalk)?;
    match scheduling::add_speaker_to_event(&mut state.events, event_id, speaker_id) {
        Ok(()) => Ok(String::from(
            "This speaker has now been scheduled to speak in this event.",
        )),
        Err(CoreError::DuplicateMembership { .. }) => Err(ApiError::RuleViolation {
            message: String::from("This speaker is already scheduled to speak at this event."),
        }),
        Err(err) => Err(translate_core_error(err)),
    }
}

/// Removes a speaker from an event's speaker list.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers or `ResourceNotFound` for a
/// missing event.
pub fn remove_speaker(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
    speaker_id: UserId,
) -> Result<String, ApiError> {
    session.authorize(UserOption::RemoveSpeaker)?;
    scheduling::remove_speaker_from_event(&mut state.events, event_id, speaker_id)
        .map_err(translate_core_error)?;
    Ok(String::from(
        "This speaker has been removed from the speaker list of the event.",
    ))
}

/// Cancels an event, purging every reference to it.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers or `ResourceNotFound` for a
/// missing event.
pub fn cancel_event(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
) -> Result<String, ApiError> {
    session.authorize(UserOption::CancelEvent)?;
    scheduling::cancel_event(&mut state.rooms, &mut state.events, &mut state.users, event_id)
        .map_err(translate_core_error)?;
    Ok(String::from("The event has been cancelled."))
}

/// Changes an event's capacity.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers, or a rule violation when the
/// new capacity is 0, below the attendee count, or above the room's.
pub fn change_capacity(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
    capacity: u32,
) -> Result<String, ApiError> {
    session.authorize(UserOption::ChangeCapacity)?;
    match scheduling::change_capacity(&state.rooms, &mut state.events, event_id, capacity) {
        Ok(()) => Ok(format!("The event's capacity has been set to {capacity}.")),
        Err(CoreError::Domain(atrium_domain::DomainError::CapacityBelowAttendees {
            ..
        })) => Err(ApiError::RuleViolation {
            message: String::from(
                "Change could not be made as the current number of attendees of the event \
                 exceeds the given capacity.",
            ),
        }),
        Err(err) => Err(translate_core_error(err)),
    }
}

// ---------------------------------------------------------------------------
// Sign-up
// ---------------------------------------------------------------------------

const SIGN_UP_FAILED: &str = "Sign up was unsuccessful. Either event is full, invalid or \
                              you've already signed up for the event.";

/// Signs the active user up for an event.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not sign up, or a rule
/// violation when the event is full, unknown, already joined, or overlaps
/// another sign-up.
pub fn sign_up(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::SignUpForEvent)?;
    match signup::sign_up(&state.rooms, &mut state.events, &mut state.users, user_id, event_id)
    {
        Ok(()) => Ok(String::from("You've signed up to the event successfully.")),
        Err(
            CoreError::EventFull { .. }
            | CoreError::DuplicateMembership { .. }
            | CoreError::EventNotFound(_),
        ) => Err(ApiError::RuleViolation {
            message: String::from(SIGN_UP_FAILED),
        }),
        Err(CoreError::ScheduleConflict { .. }) => Err(ApiError::RuleViolation {
            message: String::from(
                "Sign up was unsuccessful. The event overlaps another event you signed up for.",
            ),
        }),
        Err(err) => Err(translate_core_error(err)),
    }
}

/// Cancels the active user's spot in an event. A spot never held is a
/// no-op.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not cancel, or
/// `ResourceNotFound` for a missing event.
pub fn cancel_spot(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::CancelSpotForEvent)?;
    match signup::cancel_spot(&mut state.events, &mut state.users, user_id, event_id) {
        Ok(()) => Ok(String::from("You've disenrolled from the event successfully.")),
        Err(CoreError::EventNotFound(_)) => Err(ApiError::RuleViolation {
            message: String::from("No such event."),
        }),
        Err(err) => Err(translate_core_error(err)),
    }
}

// ---------------------------------------------------------------------------
// Event views
// ---------------------------------------------------------------------------

/// Lists every scheduled event.
///
/// # Errors
///
/// Returns `Unauthorized` when the role's option set lacks the view.
pub fn list_all_events(
    state: &AppState,
    session: &Session,
) -> Result<Vec<EventSummary>, ApiError> {
    session.authorize_view(UserOption::ViewAllEvents)?;
    Ok(event_summaries(state, &state.events.all_ids()))
}

/// Lists the events whose start instant clashes with none of the active
/// user's sign-ups.
///
/// This is the exact-instant availability listing; interval-level conflicts
/// are still rejected at sign-up.
///
/// # Errors
///
/// Returns `Unauthorized` when the role's option set lacks the view.
pub fn list_available_events(
    state: &AppState,
    session: &Session,
) -> Result<Vec<EventSummary>, ApiError> {
    let user_id: UserId = session.authorize(UserOption::ViewAvailableEvents)?;
    let attended: Vec<EventId> = state
        .users
        .events_of(user_id)
        .map_err(translate_core_error)?;
    let available: Vec<EventId> = state.events.no_conflict_with(&attended);
    Ok(event_summaries(state, &available))
}

/// Lists the events the active user signed up for.
///
/// # Errors
///
/// Returns `Unauthorized` when the role's option set lacks the view.
pub fn list_signed_up_events(
    state: &AppState,
    session: &Session,
) -> Result<Vec<EventSummary>, ApiError> {
    let user_id: UserId = session.authorize(UserOption::ViewSignUpEvents)?;
    let attended: Vec<EventId> = state
        .users
        .events_of(user_id)
        .map_err(translate_core_error)?;
    Ok(event_summaries(state, &attended))
}

/// Lists the events starting on one local day.
///
/// # Errors
///
/// Returns `Unauthorized` when the role's option set lacks the view.
pub fn list_events_by_day(
    state: &AppState,
    session: &Session,
    date: NaiveDate,
) -> Result<Vec<EventSummary>, ApiError> {
    session.authorize_view(UserOption::ViewEventsByDay)?;
    Ok(event_summaries(state, &state.events.by_day(date)))
}

/// Lists the events a speaker speaks at.
///
/// # Errors
///
/// Returns `Unauthorized` when the role's option set lacks the view.
pub fn list_events_by_speaker(
    state: &AppState,
    session: &Session,
    speaker_id: UserId,
) -> Result<Vec<EventSummary>, ApiError> {
    session.authorize_view(UserOption::ViewEventsBySpeaker)?;
    Ok(event_summaries(state, &state.events.by_speaker(speaker_id)))
}

/// Lists the events the active speaker is scheduled to speak in.
///
/// # Errors
///
/// Returns `Unauthorized` for non-speakers.
pub fn list_scheduled_talks(
    state: &AppState,
    session: &Session,
) -> Result<Vec<EventSummary>, ApiError> {
    let speaker_id: UserId = session.authorize(UserOption::ViewScheduledTalk)?;
    Ok(event_summaries(state, &state.events.by_speaker(speaker_id)))
}

/// Lists the attendees of an event the active speaker speaks in.
///
/// # Errors
///
/// Returns `Unauthorized` for non-speakers, `ResourceNotFound` for a
/// missing event, or a rule violation when the speaker does not speak
/// there.
pub fn list_talk_attendees(
    state: &AppState,
    session: &Session,
    event_id: EventId,
) -> Result<Vec<UserSummary>, ApiError> {
    let speaker_id: UserId = session.authorize(UserOption::ViewTalkAttendees)?;
    let event: &Event = state
        .events
        .require(event_id)
        .map_err(translate_core_error)?;
    if !event.has_speaker(speaker_id) {
        return Err(ApiError::RuleViolation {
            message: String::from("You are not scheduled to speak in this event."),
        });
    }
    let mut summaries: Vec<UserSummary> = event
        .attendees()
        .into_iter()
        .filter_map(|attendee| state.users.get(attendee))
        .map(|user| UserSummary {
            user_id: user.id(),
            line: user_line(user),
        })
        .collect();
    summaries.sort_by(|a, b| a.line.cmp(&b.line));
    Ok(summaries)
}

/// Summarizes the conference: rooms, users, events by kind, and the most
/// popular event.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers.
pub fn stats(state: &AppState, session: &Session) -> Result<String, ApiError> {
    session.authorize(UserOption::ViewConferenceStats)?;
    let mut parties: usize = 0;
    let mut talks: usize = 0;
    let mut panels: usize = 0;
    let mut total_signups: usize = 0;
    let mut most_popular: Option<(&Event, usize)> = None;
    for event in state.events.iter() {
        match event.kind() {
            atrium_domain::EventKind::Party => parties += 1,
            atrium_domain::EventKind::Talk => talks += 1,
            atrium_domain::EventKind::Panel => panels += 1,
        }
        total_signups += event.attendee_count();
        if most_popular.is_none_or(|(_, count)| event.attendee_count() > count) {
            most_popular = Some((event, event.attendee_count()));
        }
    }
    let mut output: String = format!(
        "Rooms: {}\nUsers: {}\nEvents: {} ({parties} parties, {talks} talks, {panels} panels)\n\
         Total sign-ups: {total_signups}",
        state.rooms.len(),
        state.users.len(),
        state.events.len(),
    );
    if let Some((event, count)) = most_popular {
        output.push_str(&format!(
            "\nMost popular event: {} with {count} attendees",
            event.name()
        ));
    }
    Ok(output)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Creates a user account of any role.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers or a rule violation when the
/// email is already registered.
pub fn create_user(
    state: &mut AppState,
    session: &Session,
    request: CreateUserRequest,
) -> Result<CreateUserResponse, ApiError> {
    session.authorize(UserOption::CreateUser)?;
    let role: UserRole = request.role;
    let user_id: UserId = state
        .users
        .create_user(request.name, request.email, request.password, role)
        .map_err(translate_core_error)?;
    Ok(CreateUserResponse {
        user_id,
        message: format!("{role} user account was created."),
    })
}

/// Changes a user's role, given their correct credentials.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers, `ResourceNotFound` when the
/// email is unknown, or `AuthenticationFailed` when the password does not
/// match.
pub fn change_user_role(
    state: &mut AppState,
    session: &Session,
    email: &str,
    password: &str,
    role: UserRole,
) -> Result<String, ApiError> {
    session.authorize(UserOption::ChangeUserType)?;
    let Some(user) = state.users.find_by_email(email) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: String::from("User does not exist."),
        });
    };
    if !user.password_matches(password) {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from(
                "Email and password do not match. Failed to change the user type.",
            ),
        });
    }
    let user_id: UserId = user.id();
    state
        .users
        .require_mut(user_id)
        .map_err(translate_core_error)?
        .set_role(role);
    Ok(format!("User type was set to {role}."))
}

/// Finds a user by login email.
///
/// # Errors
///
/// Returns `ResourceNotFound` when no account uses the email.
pub fn find_user_by_email(state: &AppState, email: &str) -> Result<UserSummary, ApiError> {
    state
        .users
        .find_by_email(email)
        .map(|user| UserSummary {
            user_id: user.id(),
            line: user_line(user),
        })
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: String::from("No such user exists!"),
        })
}

/// Lists the users of one role, in creation order.
#[must_use]
pub fn list_users_of_role(state: &AppState, role: UserRole) -> Vec<UserSummary> {
    state
        .users
        .users_of_role(role)
        .into_iter()
        .filter_map(|user_id| state.users.get(user_id))
        .map(|user| UserSummary {
            user_id: user.id(),
            line: user_line(user),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// User requests
// ---------------------------------------------------------------------------

/// Files a free-text request with the organizers.
///
/// # Errors
///
/// Returns `AuthenticationFailed` when no account is logged in.
pub fn file_request(
    state: &mut AppState,
    session: &Session,
    content: String,
) -> Result<String, ApiError> {
    let user_id: UserId = session
        .active_user_id()
        .ok_or_else(|| ApiError::AuthenticationFailed {
            reason: String::from("you must log in first"),
        })?;
    state.requests.file(user_id, content);
    Ok(String::from("Your request has been filed."))
}

/// Lists the pending user requests.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers.
pub fn list_requests(
    state: &AppState,
    session: &Session,
) -> Result<Vec<RequestSummary>, ApiError> {
    session.authorize(UserOption::ViewUserRequests)?;
    Ok(state
        .requests
        .pending()
        .into_iter()
        .map(|request| {
            let filer: String = state
                .users
                .get(request.user_id())
                .map_or_else(|| request.user_id().to_string(), |user| user.name().to_owned());
            RequestSummary {
                request_id: request.id(),
                line: format!("{filer}: {}", request.content()),
            }
        })
        .collect())
}

/// Marks a user request addressed.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers or `ResourceNotFound` for a
/// missing request.
pub fn address_request(
    state: &mut AppState,
    session: &Session,
    request_id: RequestId,
) -> Result<String, ApiError> {
    session.authorize(UserOption::AddressUserRequest)?;
    state
        .requests
        .mark_addressed(request_id)
        .map_err(translate_core_error)?;
    Ok(String::from("Request marked as addressed."))
}

// ---------------------------------------------------------------------------
// VIP favourites and interests
// ---------------------------------------------------------------------------

/// Adds a speaker to the active VIP's favourites.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs.
pub fn like_speaker(
    state: &mut AppState,
    session: &Session,
    speaker_id: UserId,
) -> Result<String, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageFavouriteSpeakers)?;
    state
        .users
        .like_speaker(vip_id, speaker_id)
        .map_err(translate_core_error)?;
    Ok(String::from("Speaker added to your favourites."))
}

/// Removes a speaker from the active VIP's favourites.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs.
pub fn dislike_speaker(
    state: &mut AppState,
    session: &Session,
    speaker_id: UserId,
) -> Result<String, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageFavouriteSpeakers)?;
    state
        .users
        .dislike_speaker(vip_id, speaker_id)
        .map_err(translate_core_error)?;
    Ok(String::from("Speaker removed from your favourites."))
}

/// Lists the active VIP's favourite speakers.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs.
pub fn list_favourite_speakers(
    state: &AppState,
    session: &Session,
) -> Result<Vec<UserSummary>, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageFavouriteSpeakers)?;
    let user: &User = state.users.require(vip_id).map_err(translate_core_error)?;
    let mut summaries: Vec<UserSummary> = user
        .vip_profile()
        .map(|profile| {
            profile
                .favourite_speakers
                .iter()
                .filter_map(|speaker_id| state.users.get(*speaker_id))
                .map(|speaker| UserSummary {
                    user_id: speaker.id(),
                    line: user_line(speaker),
                })
                .collect()
        })
        .unwrap_or_default();
    summaries.sort_by(|a, b| a.line.cmp(&b.line));
    Ok(summaries)
}

/// Adds an event to the active VIP's interest wishlist.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs or `ResourceNotFound` for a missing
/// event.
pub fn interested_in_event(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
) -> Result<String, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageInterestedEvents)?;
    state
        .events
        .require(event_id)
        .map_err(translate_core_error)?;
    state
        .users
        .interested_in_event(vip_id, event_id)
        .map_err(translate_core_error)?;
    Ok(String::from("Added to your interested events."))
}

/// Removes an event from the active VIP's interest wishlist. A pure
/// remove: an absent event is a no-op.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs.
pub fn uninterested_in_event(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
) -> Result<String, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageInterestedEvents)?;
    state
        .users
        .uninterested_in_event(vip_id, event_id)
        .map_err(translate_core_error)?;
    Ok(String::from("Removed from your interested events."))
}

/// Lists the active VIP's interested events.
///
/// # Errors
///
/// Returns `Unauthorized` for non-VIPs.
pub fn list_interested_events(
    state: &AppState,
    session: &Session,
) -> Result<Vec<EventSummary>, ApiError> {
    let vip_id: UserId = session.authorize(UserOption::ManageInterestedEvents)?;
    let user: &User = state.users.require(vip_id).map_err(translate_core_error)?;
    let interested: Vec<EventId> = user
        .vip_profile()
        .map(|profile| profile.interested_events.iter().copied().collect())
        .unwrap_or_default();
    Ok(event_summaries(state, &interested))
}

// ---------------------------------------------------------------------------
// Friends and messaging
// ---------------------------------------------------------------------------

/// Adds the user with the given email to the active user's friend list.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message, or a rule
/// violation for an unknown email or an existing friendship.
pub fn add_friend(
    state: &mut AppState,
    session: &Session,
    email: &str,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let friend_id: UserId = find_user_by_email(state, email)?.user_id;
    let user: &User = state.users.require(user_id).map_err(translate_core_error)?;
    if user.is_friend(friend_id) {
        return Err(ApiError::RuleViolation {
            message: String::from("This user is already your friend."),
        });
    }
    state
        .users
        .require_mut(user_id)
        .map_err(translate_core_error)?
        .add_friend(friend_id);
    Ok(String::from("Successfully Added."))
}

/// Removes the user with the given email from the active user's friend
/// list.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message, or a rule
/// violation for an unknown email or a missing friendship.
pub fn remove_friend(
    state: &mut AppState,
    session: &Session,
    email: &str,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let friend_id: UserId = find_user_by_email(state, email)?.user_id;
    let user: &User = state.users.require(user_id).map_err(translate_core_error)?;
    if !user.is_friend(friend_id) {
        return Err(ApiError::RuleViolation {
            message: String::from("This user is not your friend."),
        });
    }
    state
        .users
        .require_mut(user_id)
        .map_err(translate_core_error)?
        .remove_friend(friend_id);
    Ok(String::from("Successfully Removed."))
}

/// Lists the active user's friends.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message.
pub fn list_friends(state: &AppState, session: &Session) -> Result<Vec<UserSummary>, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let user: &User = state.users.require(user_id).map_err(translate_core_error)?;
    Ok(user
        .friends()
        .into_iter()
        .filter_map(|friend_id| state.users.get(friend_id))
        .map(|friend| UserSummary {
            user_id: friend.id(),
            line: user_line(friend),
        })
        .collect())
}

/// Sends a direct message from the active user.
///
/// Attendee and VIP senders must hold a mutual friendship with every
/// recipient; organizers and speakers message freely.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message, or a rule
/// violation on a missing mutual friendship.
pub fn send_direct_message(
    state: &mut AppState,
    session: &Session,
    recipients: &[UserId],
    content: String,
) -> Result<String, ApiError> {
    let sender: UserId = session.authorize(UserOption::AccessMessaging)?;
    let sender_role: UserRole = state
        .users
        .require(sender)
        .map_err(translate_core_error)?
        .role();
    if matches!(sender_role, UserRole::Attendee | UserRole::Vip) {
        for recipient in recipients {
            let mutual: bool = state
                .users
                .require(sender)
                .map_err(translate_core_error)?
                .is_friend(*recipient)
                && state
                    .users
                    .require(*recipient)
                    .map_err(translate_core_error)?
                    .is_friend(sender);
            if !mutual {
                return Err(ApiError::RuleViolation {
                    message: String::from(
                        "You and the recipient(s) must have each other added as friends",
                    ),
                });
            }
        }
    }
    state
        .board
        .send_new(
            &mut state.users,
            ConversationKind::Direct,
            sender,
            recipients,
            None,
            local_now(),
            content,
        )
        .map_err(translate_core_error)?;
    Ok(String::from("Message Sent"))
}

/// Organizer broadcast to every attendee or every speaker.
///
/// # Errors
///
/// Returns `Unauthorized` for non-organizers, or `InvalidInput` for a group
/// other than attendees or speakers.
pub fn message_all(
    state: &mut AppState,
    session: &Session,
    group: UserRole,
    content: String,
) -> Result<String, ApiError> {
    let sender: UserId = session.authorize(UserOption::SendMessageToAll)?;
    if !matches!(group, UserRole::Attendee | UserRole::Speaker) {
        return Err(ApiError::InvalidInput {
            message: String::from("Broadcasts go to Attendees or Speakers."),
        });
    }
    let recipients: Vec<UserId> = state
        .users
        .users_of_role(group)
        .into_iter()
        .filter(|recipient| *recipient != sender)
        .collect();
    if recipients.is_empty() {
        return Err(ApiError::RuleViolation {
            message: format!("There are no {group} users to message."),
        });
    }
    state
        .board
        .send_new(
            &mut state.users,
            ConversationKind::Organizer,
            sender,
            &recipients,
            None,
            local_now(),
            content,
        )
        .map_err(translate_core_error)?;
    Ok(String::from("Message Sent"))
}

/// Messages the attendees of an event the active speaker speaks in.
///
/// # Errors
///
/// Returns `Unauthorized` for non-speakers, `ResourceNotFound` for a
/// missing event, or a rule violation when the speaker does not speak
/// there or nobody signed up.
pub fn message_event_attendees(
    state: &mut AppState,
    session: &Session,
    event_id: EventId,
    content: String,
) -> Result<String, ApiError> {
    let sender: UserId = session.authorize(UserOption::SendMessageToEventAttendees)?;
    let event: &Event = state
        .events
        .require(event_id)
        .map_err(translate_core_error)?;
    if !event.has_speaker(sender) {
        return Err(ApiError::RuleViolation {
            message: String::from("You are not scheduled to speak in this event."),
        });
    }
    let event_name: String = event.name().to_owned();
    let recipients: Vec<UserId> = event.attendees().into_iter().collect();
    if recipients.is_empty() {
        return Err(ApiError::RuleViolation {
            message: String::from("Nobody has signed up for this event yet."),
        });
    }
    state
        .board
        .send_new(
            &mut state.users,
            ConversationKind::Event,
            sender,
            &recipients,
            Some(event_name),
            local_now(),
            content,
        )
        .map_err(translate_core_error)?;
    Ok(String::from("Message Sent"))
}

fn participant_names(state: &AppState, participants: &[UserId]) -> String {
    let names: Vec<String> = participants
        .iter()
        .map(|participant| {
            state
                .users
                .get(*participant)
                .map_or_else(|| participant.to_string(), |user| user.name().to_owned())
        })
        .collect();
    names.join(", ")
}

/// Lists the active user's conversations, newest last, with unread marks.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message.
pub fn list_conversations(
    state: &AppState,
    session: &Session,
) -> Result<Vec<ConversationSummary>, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let user: &User = state.users.require(user_id).map_err(translate_core_error)?;
    let unread: Vec<_> = user.unread_conversations();
    Ok(user
        .conversations()
        .into_iter()
        .enumerate()
        .filter_map(|(position, conversation_id)| {
            state.board.get(conversation_id).map(|conversation| {
                let mut line: String = String::new();
                if unread.contains(&conversation_id) {
                    line.push_str("[Unread] ");
                }
                match conversation.kind() {
                    ConversationKind::Direct => {}
                    ConversationKind::Event => {
                        line.push_str(conversation.event_name().unwrap_or("Event"));
                        line.push_str(" - ");
                    }
                    ConversationKind::Organizer => line.push_str("[Announcement] "),
                }
                line.push_str(&participant_names(state, &conversation.participants()));
                ConversationSummary {
                    index: position + 1,
                    line,
                }
            })
        })
        .collect())
}

/// Shows one conversation (1-based index into the viewer's list) and marks
/// it read.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message, or `InvalidInput`
/// for an index outside the viewer's list.
pub fn view_conversation(
    state: &mut AppState,
    session: &Session,
    index: usize,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let conversation_id = conversation_at(state, user_id, index)?;
    state
        .users
        .require_mut(user_id)
        .map_err(translate_core_error)?
        .mark_conversation_read(conversation_id);

    let conversation = state
        .board
        .get(conversation_id)
        .ok_or(CoreError::ConversationNotFound(conversation_id))
        .map_err(translate_core_error)?;
    let mut output: String = format!(
        "Conversation with: {}\n===========================\n",
        participant_names(state, &conversation.participants())
    );
    for message in conversation.messages() {
        let sender: String = state
            .users
            .get(message.sender)
            .map_or_else(|| message.sender.to_string(), |user| user.name().to_owned());
        output.push_str(&format!(
            "{sender} ({}): {}\n",
            message.sent_at.format("%H:%M"),
            message.body
        ));
    }
    Ok(output)
}

/// Replies to one of the active user's conversations.
///
/// # Errors
///
/// Returns `Unauthorized` when the role may not message, or `InvalidInput`
/// for an index outside the viewer's list.
pub fn reply_to_conversation(
    state: &mut AppState,
    session: &Session,
    index: usize,
    content: String,
) -> Result<String, ApiError> {
    let user_id: UserId = session.authorize(UserOption::AccessMessaging)?;
    let conversation_id = conversation_at(state, user_id, index)?;
    state
        .board
        .reply(&mut state.users, conversation_id, user_id, local_now(), content)
        .map_err(translate_core_error)?;
    Ok(String::from("Reply Sent"))
}

fn conversation_at(
    state: &AppState,
    user_id: UserId,
    index: usize,
) -> Result<atrium_domain::ConversationId, ApiError> {
    let conversations = state
        .users
        .require(user_id)
        .map_err(translate_core_error)?
        .conversations();
    if index == 0 || index > conversations.len() {
        return Err(ApiError::InvalidInput {
            message: String::from("Invalid Conversation Index"),
        });
    }
    Ok(conversations[index - 1])
}
