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

//! Bulk load/store of the five persisted containers.
//!
//! The containers are opaque to the core: conversations (sequence), events
//! (map), rooms (map), users (sequence), and user requests (sequence). Each
//! lives in one JSON file in the data directory. At startup either all five
//! files are present and loaded, or none are and the system starts empty;
//! partial presence is an error.

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use atrium_domain::{Conversation, Event, EventId, Room, RoomId, User, UserRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the conversations container.
pub const CONVERSATIONS_FILE: &str = "conversations.json";
/// File name of the events container.
pub const EVENTS_FILE: &str = "events.json";
/// File name of the rooms container.
pub const ROOMS_FILE: &str = "rooms.json";
/// File name of the users container.
pub const USERS_FILE: &str = "users.json";
/// File name of the user requests container.
pub const USER_REQUESTS_FILE: &str = "user_requests.json";

const ALL_FILES: [&str; 5] = [
    CONVERSATIONS_FILE,
    EVENTS_FILE,
    ROOMS_FILE,
    USERS_FILE,
    USER_REQUESTS_FILE,
];

/// The five persisted containers, together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    /// All conversations, in creation order.
    pub conversations: Vec<Conversation>,
    /// All events, by identifier.
    pub events: HashMap<EventId, Event>,
    /// All rooms, by identifier.
    pub rooms: HashMap<RoomId, Room>,
    /// All user accounts, in creation order.
    pub users: Vec<User>,
    /// All user requests, in filing order.
    pub user_requests: Vec<UserRequest>,
}

/// The result of a startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// All five containers were present and loaded.
    Loaded(DataSet),
    /// No saved state was found; the caller starts empty and may seed.
    Fresh,
}

/// Loads and saves the five containers in a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given data directory.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the saved state.
    ///
    /// # Errors
    ///
    /// Returns `PartialState` if only some container files exist, or an
    /// `Io`/`Serialization` error if a present file cannot be read or
    /// decoded.
    pub fn load(&self) -> Result<LoadOutcome, PersistenceError> {
        let present: Vec<&str> = ALL_FILES
            .into_iter()
            .filter(|name| self.dir.join(name).exists())
            .collect();
        if present.is_empty() {
            info!(dir = %self.dir.display(), "no saved state found, starting empty");
            return Ok(LoadOutcome::Fresh);
        }
        if present.len() < ALL_FILES.len() {
            let missing: Vec<String> = ALL_FILES
                .into_iter()
                .filter(|name| !present.contains(name))
                .map(str::to_owned)
                .collect();
            warn!(?present, ?missing, "refusing to load partial saved state");
            return Err(PersistenceError::PartialState {
                present: present.into_iter().map(str::to_owned).collect(),
                missing,
            });
        }

        let data: DataSet = DataSet {
            conversations: self.read_container(CONVERSATIONS_FILE)?,
            events: self.read_container(EVENTS_FILE)?,
            rooms: self.read_container(ROOMS_FILE)?,
            users: self.read_container(USERS_FILE)?,
            user_requests: self.read_container(USER_REQUESTS_FILE)?,
        };
        info!(
            events = data.events.len(),
            rooms = data.rooms.len(),
            users = data.users.len(),
            "loaded saved state"
        );
        Ok(LoadOutcome::Loaded(data))
    }

    /// Saves all five containers, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an `Io` or `Serialization` error if any file cannot be
    /// written.
    pub fn save(&self, data: &DataSet) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| PersistenceError::Io {
            path: self.dir.display().to_string(),
            message: err.to_string(),
        })?;
        self.write_container(CONVERSATIONS_FILE, &data.conversations)?;
        self.write_container(EVENTS_FILE, &data.events)?;
        self.write_container(ROOMS_FILE, &data.rooms)?;
        self.write_container(USERS_FILE, &data.users)?;
        self.write_container(USER_REQUESTS_FILE, &data.user_requests)?;
        info!(
            events = data.events.len(),
            rooms = data.rooms.len(),
            users = data.users.len(),
            "saved state"
        );
        Ok(())
    }

    fn read_container<T: DeserializeOwned>(&self, name: &str) -> Result<T, PersistenceError> {
        let path: PathBuf = self.dir.join(name);
        debug!(path = %path.display(), "reading container");
        let contents: String =
            std::fs::read_to_string(&path).map_err(|err| PersistenceError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        serde_json::from_str(&contents).map_err(|err| PersistenceError::Serialization {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    fn write_container<T: Serialize>(&self, name: &str, value: &T) -> Result<(), PersistenceError> {
        let path: PathBuf = self.dir.join(name);
        debug!(path = %path.display(), "writing container");
        let contents: String =
            serde_json::to_string_pretty(value).map_err(|err| PersistenceError::Serialization {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        std::fs::write(&path, contents).map_err(|err| PersistenceError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
