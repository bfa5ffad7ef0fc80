// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed menu option set and its role mapping.
//!
//! Permissions are enforced here: a handler first checks that the caller's
//! role lists the option it implements.

use atrium_domain::UserRole;

/// Every option the menu can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOption {
    /// Enter the messenger.
    AccessMessaging,
    /// List events the active user could still sign up for.
    ViewAvailableEvents,
    /// List every scheduled event.
    ViewAllEvents,
    /// List the events the active user signed up for.
    ViewSignUpEvents,
    /// List events on one day.
    ViewEventsByDay,
    /// List events by speaker.
    ViewEventsBySpeaker,
    /// Sign up for an event.
    SignUpForEvent,
    /// Cancel a spot in an event.
    CancelSpotForEvent,
    /// Create an event.
    CreateEvent,
    /// Create a user account.
    CreateUser,
    /// Change a user's role.
    ChangeUserType,
    /// Message the attendees of one of the speaker's events.
    SendMessageToEventAttendees,
    /// Organizer broadcast to all attendees or all speakers.
    SendMessageToAll,
    /// List the events the active speaker speaks in.
    ViewScheduledTalk,
    /// List attendees of one of the speaker's events.
    ViewTalkAttendees,
    /// Schedule a speaker into an event.
    ScheduleSpeakerTalk,
    /// Create a room.
    AddRooms,
    /// Show conference statistics.
    ViewConferenceStats,
    /// Remove a speaker from an event.
    RemoveSpeaker,
    /// Cancel an event.
    CancelEvent,
    /// Change an event's capacity.
    ChangeCapacity,
    /// List user requests.
    ViewUserRequests,
    /// Mark a user request addressed.
    AddressUserRequest,
    /// Log in.
    LogIn,
    /// Log out.
    LogOut,
    /// Exit and save.
    Exit,
    /// Browse without an account.
    ExploreAsAGuest,
    /// Host a party (VIP).
    CreateParty,
    /// Manage the VIP interest wishlist.
    ManageInterestedEvents,
    /// Manage the VIP favourite speakers.
    ManageFavouriteSpeakers,
}

/// Options every logged-in attendee-like role shares.
pub const ATTENDEE_OPTIONS: [UserOption; 8] = [
    UserOption::AccessMessaging,
    UserOption::ViewAvailableEvents,
    UserOption::ViewAllEvents,
    UserOption::ViewSignUpEvents,
    UserOption::SignUpForEvent,
    UserOption::CancelSpotForEvent,
    UserOption::ViewEventsByDay,
    UserOption::ViewEventsBySpeaker,
];

/// Options reserved for organizers.
pub const ORGANIZER_OPTIONS: [UserOption; 12] = [
    UserOption::CreateEvent,
    UserOption::CreateUser,
    UserOption::ChangeUserType,
    UserOption::ScheduleSpeakerTalk,
    UserOption::AddRooms,
    UserOption::SendMessageToAll,
    UserOption::ViewConferenceStats,
    UserOption::RemoveSpeaker,
    UserOption::CancelEvent,
    UserOption::ChangeCapacity,
    UserOption::ViewUserRequests,
    UserOption::AddressUserRequest,
];

/// Options reserved for speakers.
pub const SPEAKER_OPTIONS: [UserOption; 3] = [
    UserOption::ViewScheduledTalk,
    UserOption::ViewTalkAttendees,
    UserOption::SendMessageToEventAttendees,
];

/// Options available while browsing as a guest.
pub const GUEST_OPTIONS: [UserOption; 4] = [
    UserOption::ViewAllEvents,
    UserOption::ViewEventsByDay,
    UserOption::ViewEventsBySpeaker,
    UserOption::LogIn,
];

/// Options reserved for VIPs.
pub const VIP_OPTIONS: [UserOption; 3] = [
    UserOption::CreateParty,
    UserOption::ManageInterestedEvents,
    UserOption::ManageFavouriteSpeakers,
];

impl UserOption {
    /// Returns the menu label of this option.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccessMessaging => "Enter Messenger",
            Self::ViewAvailableEvents => "View Events Available for You to Sign-Up",
            Self::ViewAllEvents => "View All Scheduled Events",
            Self::ViewSignUpEvents => "View Events You Have Signed up To",
            Self::ViewEventsByDay => "View Events by Day",
            Self::ViewEventsBySpeaker => "View Events by Speaker",
            Self::SignUpForEvent => "Sign Up for Event",
            Self::CancelSpotForEvent => "Cancel Spot in Event",
            Self::CreateEvent => "Create Event",
            Self::CreateUser => "Create User",
            Self::ChangeUserType => "Change User Type",
            Self::SendMessageToEventAttendees => "Send Message to Event Attendees",
            Self::SendMessageToAll => "Send Message to All",
            Self::ViewScheduledTalk => "View All Events That You Are Scheduled to Speak In",
            Self::ViewTalkAttendees => "View Attendees for an Event you are Speaking In",
            Self::ScheduleSpeakerTalk => "Schedule Speakers to Speak in an Event",
            Self::AddRooms => "Create New Rooms",
            Self::ViewConferenceStats => "View Interesting Statistics of the Conference",
            Self::RemoveSpeaker => "Remove a speaker from an event's speaker list",
            Self::CancelEvent => "Cancel an event",
            Self::ChangeCapacity => "Change an event's capacity",
            Self::ViewUserRequests => "View all User Requests",
            Self::AddressUserRequest => "Mark a User Request as Addressed",
            Self::LogIn => "Login",
            Self::LogOut => "Log Out",
            Self::Exit => "Exit and Save the Program",
            Self::ExploreAsAGuest => "Explore as a Guest",
            Self::CreateParty => "Host a Party",
            Self::ManageInterestedEvents => "Manage Interested Events",
            Self::ManageFavouriteSpeakers => "Manage Favourite Speakers",
        }
    }
}

impl std::fmt::Display for UserOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the options a role may perform.
///
/// Organizers, speakers, and VIPs extend the attendee set; guests get their
/// own reduced set.
#[must_use]
pub fn options_for(role: UserRole) -> Vec<UserOption> {
    match role {
        UserRole::Attendee => ATTENDEE_OPTIONS.to_vec(),
        UserRole::Organizer => {
            let mut options: Vec<UserOption> = ATTENDEE_OPTIONS.to_vec();
            options.extend(ORGANIZER_OPTIONS);
            options
        }
        UserRole::Speaker => {
            let mut options: Vec<UserOption> = ATTENDEE_OPTIONS.to_vec();
            options.extend(SPEAKER_OPTIONS);
            options
        }
        UserRole::Guest => GUEST_OPTIONS.to_vec(),
        UserRole::Vip => {
            let mut options: Vec<UserOption> = ATTENDEE_OPTIONS.to_vec();
            options.extend(VIP_OPTIONS);
            options
        }
    }
}

/// Resolves a menu selection against a presented option list, accepting a
/// 1-based index or a case-insensitive label.
#[must_use]
pub fn select_option(options: &[UserOption], input: &str) -> Option<UserOption> {
    let trimmed: &str = input.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Some(options[index - 1]);
        }
        return None;
    }
    options
        .iter()
        .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
        .copied()
}
