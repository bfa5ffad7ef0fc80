// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The CLI session: the active-user slot and authentication.
//!
//! The active user is a session concern, never a core concern; every core
//! call receives an explicit user id. Credentials are stored and compared
//! in plaintext by design.

use crate::error::ApiError;
use crate::options::{UserOption, options_for};
use atrium_core::UserDirectory;
use atrium_domain::{UserId, UserRole};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// The identity currently driving the session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Identity {
    /// A logged-in account.
    Account {
        user_id: UserId,
        role: UserRole,
        token: String,
    },
    /// Browsing without an account.
    Guest { token: String },
}

/// Tracks who is driving the menu.
#[derive(Debug, Clone, Default)]
pub struct Session {
    active: Option<Identity>,
}

impl Session {
    /// Creates a logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the email is unknown or the
    /// password does not match; the session is unchanged in that case.
    pub fn login(
        &mut self,
        users: &UserDirectory,
        email: &str,
        password: &str,
    ) -> Result<UserId, ApiError> {
        let user = users
            .find_by_email(email)
            .ok_or_else(|| ApiError::AuthenticationFailed {
                reason: String::from("email and password do not match"),
            })?;
        if !user.password_matches(password) {
            return Err(ApiError::AuthenticationFailed {
                reason: String::from("email and password do not match"),
            });
        }
        let user_id: UserId = user.id();
        info!(%user_id, role = %user.role(), "user logged in");
        self.active = Some(Identity::Account {
            user_id,
            role: user.role(),
            token: generate_session_token(),
        });
        Ok(user_id)
    }

    /// Starts a guest session.
    pub fn login_as_guest(&mut self) {
        info!("guest session started");
        self.active = Some(Identity::Guest {
            token: generate_session_token(),
        });
    }

    /// Ends the active session.
    pub fn logout(&mut self) {
        self.active = None;
    }

    /// Returns whether anyone (account or guest) is driving the session.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the logged-in account's user id, if any.
    #[must_use]
    pub const fn active_user_id(&self) -> Option<UserId> {
        match &self.active {
            Some(Identity::Account { user_id, .. }) => Some(*user_id),
            _ => None,
        }
    }

    /// Returns the active role: the account's role, or Guest for a guest
    /// session.
    #[must_use]
    pub const fn active_role(&self) -> Option<UserRole> {
        match &self.active {
            Some(Identity::Account { role, .. }) => Some(*role),
            Some(Identity::Guest { .. }) => Some(UserRole::Guest),
            None => None,
        }
    }

    /// Returns the session token, if a session is active.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match &self.active {
            Some(Identity::Account { token, .. } | Identity::Guest { token }) => {
                Some(token.as_str())
            }
            None => None,
        }
    }

    /// Returns the menu options to present for the current session state.
    ///
    /// Logged-in non-guests additionally get Log Out; a logged-out session
    /// gets Login and guest browsing; everyone gets Exit.
    #[must_use]
    pub fn menu_options(&self) -> Vec<UserOption> {
        let mut options: Vec<UserOption> = Vec::new();
        match self.active_role() {
            Some(role) => {
                options.extend(options_for(role));
                if role != UserRole::Guest {
                    options.push(UserOption::LogOut);
                }
            }
            None => {
                options.push(UserOption::LogIn);
                options.push(UserOption::ExploreAsAGuest);
            }
        }
        options.push(UserOption::Exit);
        options
    }

    /// Checks that the active role allows the given option and returns the
    /// acting account's user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` when no account is logged in (guests
    /// included: every account-backed option needs a real user id), or
    /// `Unauthorized` when the role's option set does not list the option.
    pub fn authorize(&self, option: UserOption) -> Result<UserId, ApiError> {
        let role: UserRole = self.active_role().ok_or_else(|| {
            ApiError::AuthenticationFailed {
                reason: String::from("you must log in first"),
            }
        })?;
        if !options_for(role).contains(&option) {
            return Err(ApiError::Unauthorized { option });
        }
        self.active_user_id()
            .ok_or_else(|| ApiError::AuthenticationFailed {
                reason: String::from("you must log in first"),
            })
    }

    /// Checks that the active role allows the given read-only option,
    /// without requiring an account (guests pass).
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` when no session is active, or
    /// `Unauthorized` when the role's option set does not list the option.
    pub fn authorize_view(&self, option: UserOption) -> Result<(), ApiError> {
        let role: UserRole = self.active_role().ok_or_else(|| {
            ApiError::AuthenticationFailed {
                reason: String::from("you must log in first"),
            }
        })?;
        if !options_for(role).contains(&option) {
            return Err(ApiError::Unauthorized { option });
        }
        Ok(())
    }
}

/// Generates a session token. Not a credential: uniqueness is what matters,
/// so a timestamp plus a random suffix is enough.
fn generate_session_token() -> String {
    let timestamp: u64 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    format!("session_{timestamp}_{}", rand::random::<u64>())
}
