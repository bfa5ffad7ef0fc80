// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{
    ConversationId, DomainError, EventId, RequestId, RoomFeature, RoomId, UserId,
};
use chrono::NaiveDateTime;

/// Errors surfaced by the core services.
///
/// Every failure is detected before the first mutation of a call, so a
/// returned error implies the stores are unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated at an entity boundary.
    Domain(DomainError),
    /// The room is booked or outside its open hours for the requested slot.
    RoomUnavailable {
        /// The requested start instant.
        starts_at: NaiveDateTime,
    },
    /// The requested event capacity exceeds the room's capacity.
    RoomCapacityExceeded {
        /// The room's capacity.
        room_capacity: u32,
        /// The requested event capacity.
        requested: u32,
    },
    /// The room lacks features the event requires.
    MissingFeatures {
        /// The features the room does not offer.
        missing: Vec<RoomFeature>,
    },
    /// The proposed speaker has another speaking slot within 60 minutes.
    SpeakerConflict {
        /// The conflicted speaker.
        speaker_id: UserId,
    },
    /// The user is already an attendee, speaker, or friend of the target.
    DuplicateMembership {
        /// The user already present.
        user_id: UserId,
    },
    /// The event or its room has no attendee spots left.
    EventFull {
        /// The binding capacity.
        capacity: u32,
    },
    /// Signing up would overlap another event the user attends.
    ScheduleConflict {
        /// The already-attended event that overlaps.
        conflicting_event: EventId,
    },
    /// The email is already registered to another account.
    EmailTaken(String),
    /// The user does not hold the VIP role.
    NotVip {
        /// The user in question.
        user_id: UserId,
    },
    /// No room with the given identifier exists.
    RoomNotFound(RoomId),
    /// No event with the given identifier exists.
    EventNotFound(EventId),
    /// No user with the given identifier exists.
    UserNotFound(UserId),
    /// No conversation with the given identifier exists.
    ConversationNotFound(ConversationId),
    /// No user request with the given identifier exists.
    RequestNotFound(RequestId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{err}"),
            Self::RoomUnavailable { starts_at } => {
                write!(f, "The room is not available at {starts_at}")
            }
            Self::RoomCapacityExceeded {
                room_capacity,
                requested,
            } => {
                write!(
                    f,
                    "The room holds {room_capacity} attendees, fewer than the requested {requested}"
                )
            }
            Self::MissingFeatures { missing } => {
                write!(
                    f,
                    "The room lacks required features: {}",
                    atrium_domain::display_features(missing)
                )
            }
            Self::SpeakerConflict { speaker_id } => {
                write!(
                    f,
                    "Speaker {speaker_id} has another speaking slot within 60 minutes"
                )
            }
            Self::DuplicateMembership { user_id } => {
                write!(f, "User {user_id} is already a member of the target")
            }
            Self::EventFull { capacity } => {
                write!(f, "The event is full ({capacity} spots)")
            }
            Self::ScheduleConflict { conflicting_event } => {
                write!(
                    f,
                    "The event overlaps event {conflicting_event} the user already attends"
                )
            }
            Self::EmailTaken(email) => write!(f, "Email {email} is already registered"),
            Self::NotVip { user_id } => write!(f, "User {user_id} is not a VIP"),
            Self::RoomNotFound(id) => write!(f, "Room {id} not found"),
            Self::EventNotFound(id) => write!(f, "Event {id} not found"),
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
            Self::ConversationNotFound(id) => write!(f, "Conversation {id} not found"),
            Self::RequestNotFound(id) => write!(f, "User request {id} not found"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
