// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{RequestId, UserId};
use serde::{Deserialize, Serialize};

/// A free-text request a user files with the organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    id: RequestId,
    user_id: UserId,
    content: String,
    addressed: bool,
}

impl UserRequest {
    /// Creates a new pending request with a fresh identifier.
    #[must_use]
    pub fn new(user_id: UserId, content: String) -> Self {
        Self {
            id: RequestId::new(),
            user_id,
            content,
            addressed: false,
        }
    }

    /// Returns the request's identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the filing user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the request text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether an organizer has addressed the request.
    #[must_use]
    pub const fn is_addressed(&self) -> bool {
        self.addressed
    }

    /// Marks the request addressed.
    pub fn mark_addressed(&mut self) {
        self.addressed = true;
    }
}
