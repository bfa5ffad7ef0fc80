// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use atrium_domain::{RequestId, UserId, UserRequest};

/// Stores user requests in filing order.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    requests: Vec<UserRequest>,
}

impl RequestLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from a loaded requests container.
    #[must_use]
    pub const fn from_requests(requests: Vec<UserRequest>) -> Self {
        Self { requests }
    }

    /// Hands the requests container back for persistence.
    #[must_use]
    pub fn into_requests(self) -> Vec<UserRequest> {
        self.requests
    }

    /// Files a request and returns its identifier.
    pub fn file(&mut self, user_id: UserId, content: String) -> RequestId {
        let request: UserRequest = UserRequest::new(user_id, content);
        let request_id: RequestId = request.id();
        self.requests.push(request);
        request_id
    }

    /// Returns every request in filing order.
    #[must_use]
    pub fn all(&self) -> &[UserRequest] {
        &self.requests
    }

    /// Returns the requests no organizer has addressed yet.
    #[must_use]
    pub fn pending(&self) -> Vec<&UserRequest> {
        self.requests
            .iter()
            .filter(|request| !request.is_addressed())
            .collect()
    }

    /// Marks a request addressed.
    ///
    /// # Errors
    ///
    /// Returns `RequestNotFound` if no request has the given identifier.
    pub fn mark_addressed(&mut self, request_id: RequestId) -> Result<(), CoreError> {
        self.requests
            .iter_mut()
            .find(|request| request.id() == request_id)
            .map(UserRequest::mark_addressed)
            .ok_or(CoreError::RequestNotFound(request_id))
    }

    /// Returns the number of requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns whether the log holds no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
