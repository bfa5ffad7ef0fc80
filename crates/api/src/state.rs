// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_core::{EventRegistry, MessageBoard, RequestLog, RoomCatalog, UserDirectory};
use atrium_persistence::{DataSet, LoadOutcome};

/// The whole application state: the three shared stores plus the messaging
/// and request collaborators.
///
/// Handlers borrow this mutably per call; the borrow is the exclusion
/// discipline guarding the stores.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The room store.
    pub rooms: RoomCatalog,
    /// The event store.
    pub events: EventRegistry,
    /// The user store.
    pub users: UserDirectory,
    /// The conversations store.
    pub board: MessageBoard,
    /// The user request log.
    pub requests: RequestLog,
}

impl AppState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the state from loaded containers.
    #[must_use]
    pub fn from_dataset(data: DataSet) -> Self {
        Self {
            rooms: RoomCatalog::from_rooms(data.rooms),
            events: EventRegistry::from_events(data.events),
            users: UserDirectory::from_users(data.users),
            board: MessageBoard::from_conversations(data.conversations),
            requests: RequestLog::from_requests(data.user_requests),
        }
    }

    /// Builds the state from a startup load outcome; a fresh outcome yields
    /// an empty state.
    #[must_use]
    pub fn from_load(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded(data) => Self::from_dataset(data),
            LoadOutcome::Fresh => Self::new(),
        }
    }

    /// Hands the containers back for the exit save.
    #[must_use]
    pub fn into_dataset(self) -> DataSet {
        DataSet {
            conversations: self.board.into_conversations(),
            events: self.events.into_events(),
            rooms: self.rooms.into_rooms(),
            users: self.users.into_users(),
            user_requests: self.requests.into_requests(),
        }
    }
}
