// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use atrium_domain::{EventId, RequestId, RoomFeature, RoomId, UserId, UserRole};
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashSet};

/// API request to create a new room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomRequest {
    /// The room's display name.
    pub name: String,
    /// Maximum attendees the room holds.
    pub capacity: u32,
    /// Hour of day the room opens.
    pub open_hour: u8,
    /// Hour of day events must end by.
    pub close_hour: u8,
}

/// API response for a successful room creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomResponse {
    /// The new room's identifier.
    pub room_id: RoomId,
    /// A success message.
    pub message: String,
}

/// API request to create a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventRequest {
    /// The event's display name.
    pub name: String,
    /// Local start date-time.
    pub starts_at: NaiveDateTime,
    /// The room to book.
    pub room_id: RoomId,
    /// Proposed speakers; conflicted ones are skipped.
    pub speaker_ids: HashSet<UserId>,
    /// Maximum attendees for the event.
    pub capacity: u32,
    /// Event length in whole hours.
    pub duration_hours: u8,
    /// Features the event requires of its room.
    pub features: BTreeSet<RoomFeature>,
}

/// API response for a successful event creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventResponse {
    /// The new event's identifier.
    pub event_id: EventId,
    /// Proposed speakers skipped for a schedule conflict.
    pub skipped_speakers: Vec<UserId>,
    /// A success message, carrying a partial-speaker notice when some
    /// speakers were skipped.
    pub message: String,
}

/// API request to create a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// The user's name.
    pub name: String,
    /// The user's email, doubling as the login name.
    pub email: String,
    /// The user's password (stored in plaintext by design).
    pub password: String,
    /// The user's role.
    pub role: UserRole,
}

/// API response for a successful user creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserResponse {
    /// The new user's identifier.
    pub user_id: UserId,
    /// A success message.
    pub message: String,
}

/// One event line in a listing, paired with the identifier so the menu can
/// act on a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    /// The listed event.
    pub event_id: EventId,
    /// The display line: name, schedule, kind, and room.
    pub line: String,
}

/// One room line in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    /// The listed room.
    pub room_id: RoomId,
    /// The display line: name, capacity, hours, and features.
    pub line: String,
}

/// One user line in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// The listed user.
    pub user_id: UserId,
    /// The display line: name, email, and role.
    pub line: String,
}

/// One conversation line in a listing, with its position in the viewer's
/// conversation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    /// 1-based position in the viewer's conversation list.
    pub index: usize,
    /// The display line: unread marker, kind, and participants.
    pub line: String,
}

/// One pending or addressed user request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    /// The listed request.
    pub request_id: RequestId,
    /// The display line: filing user and content.
    pub line: String,
}
