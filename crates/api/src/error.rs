// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::options::UserOption;
use crate::parse::ParseError;
use atrium_core::CoreError;

/// API-level errors.
///
/// These are distinct from core errors and represent the API contract; the
/// CLI presents each error's display form verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The active role does not allow the requested option.
    Unauthorized {
        /// The option that was attempted.
        option: UserOption,
    },
    /// A scheduling or membership rule was violated.
    RuleViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { option } => {
                write!(f, "Your role does not allow '{option}'")
            }
            Self::RuleViolation { message } => write!(f, "{message}"),
            Self::InvalidInput { message } => write!(f, "{message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Translates a core error into an API error.
///
/// The translation is explicit so core errors never leak to the CLI
/// unshaped; the resulting messages match what the menu prints.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Domain(domain_err) => ApiError::RuleViolation {
            message: domain_err.to_string(),
        },
        CoreError::RoomUnavailable { .. } => ApiError::RuleViolation {
            message: String::from(
                "Unable to create this Event. The room may not be available at this time, or \
                 the room's capacity is less than the maximum allowed attendees for the event.",
            ),
        },
        CoreError::RoomCapacityExceeded {
            room_capacity,
            requested,
        } => ApiError::RuleViolation {
            message: format!(
                "The room holds {room_capacity} attendees, fewer than the requested {requested}."
            ),
        },
        CoreError::MissingFeatures { missing } => ApiError::RuleViolation {
            message: format!(
                "The room lacks required features: {}.",
                atrium_domain::display_features(&missing)
            ),
        },
        CoreError::SpeakerConflict { .. } => ApiError::RuleViolation {
            message: String::from(
                "This speaker cannot be set to speak in this event due to schedule conflict.",
            ),
        },
        CoreError::DuplicateMembership { .. } => ApiError::RuleViolation {
            message: String::from("Already a member: nothing to add."),
        },
        CoreError::EventFull { .. } => ApiError::RuleViolation {
            message: String::from(
                "Sign up was unsuccessful. Either event is full, invalid or you've already \
                 signed up for the event.",
            ),
        },
        CoreError::ScheduleConflict { .. } => ApiError::RuleViolation {
            message: String::from(
                "Sign up was unsuccessful. The event overlaps another event you signed up for.",
            ),
        },
        CoreError::EmailTaken(_) => ApiError::RuleViolation {
            message: String::from("Email is already registered."),
        },
        CoreError::NotVip { .. } => ApiError::RuleViolation {
            message: String::from("Only VIP users can do that."),
        },
        CoreError::RoomNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: id.to_string(),
        },
        CoreError::EventNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: id.to_string(),
        },
        CoreError::UserNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: id.to_string(),
        },
        CoreError::ConversationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Conversation"),
            message: id.to_string(),
        },
        CoreError::RequestNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("User request"),
            message: id.to_string(),
        },
    }
}
