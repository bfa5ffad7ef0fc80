// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Room construction parameters violate the numeric bounds.
    InvalidRoomParams {
        /// A description of the violated bound.
        reason: String,
    },
    /// Event construction or mutation parameters violate the numeric bounds.
    InvalidEventParams {
        /// A description of the violated bound.
        reason: String,
    },
    /// A capacity change would drop below the current attendee count.
    CapacityBelowAttendees {
        /// The current number of attendees.
        attendees: usize,
        /// The requested capacity.
        requested: u32,
    },
    /// The requested booking slot is taken or outside the room's hours.
    SlotUnavailable {
        /// The requested start instant.
        starts_at: NaiveDateTime,
    },
    /// No booking exists at the given instant in the given room.
    BookingNotFound {
        /// The instant that carried no booking.
        starts_at: NaiveDateTime,
    },
    /// A feature name did not match any of the fixed feature tags.
    UnknownFeature(String),
    /// A role name did not match any user role.
    UnknownRole(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoomParams { reason } => {
                write!(f, "Invalid room parameters: {reason}")
            }
            Self::InvalidEventParams { reason } => {
                write!(f, "Invalid event parameters: {reason}")
            }
            Self::CapacityBelowAttendees {
                attendees,
                requested,
            } => {
                write!(
                    f,
                    "Capacity {requested} is below the current number of attendees ({attendees})"
                )
            }
            Self::SlotUnavailable { starts_at } => {
                write!(f, "The room is not available at {starts_at}")
            }
            Self::BookingNotFound { starts_at } => {
                write!(f, "No booking exists at {starts_at}")
            }
            Self::UnknownFeature(name) => write!(f, "Unknown room feature: {name}"),
            Self::UnknownRole(name) => write!(f, "Unknown user role: {name}"),
        }
    }
}

impl std::error::Error for DomainError {}
