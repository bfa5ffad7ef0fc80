// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conversation;
mod error;
mod event;
mod feature;
mod ids;
mod request;
mod room;
mod user;

// Re-export public types
pub use conversation::{Conversation, ConversationKind, Message};
pub use error::DomainError;
pub use event::{DATE_TIME_FORMAT, Event, EventKind};
pub use feature::{RoomFeature, display_features};
pub use ids::{ConversationId, EventId, RequestId, RoomId, UserId};
pub use request::UserRequest;
pub use room::{Booking, Room};
pub use user::{RoleExtension, User, UserRole, VipProfile};
