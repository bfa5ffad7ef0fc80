// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive menu loop.
//!
//! Presents the role-filtered option list, gathers validated primitives
//! from the prompt, and hands everything to the api handlers. Selection is
//! by 1-based index or case-insensitive label.

use atrium_api::{
    ApiError, AppState, CreateEventRequest, CreateRoomRequest, CreateUserRequest,
    EventSummary, Session, UserOption, handlers, parse_date, parse_date_time, parse_features,
    parse_number, parse_role, select_option,
};
use atrium_domain::{EventId, RoomFeature, UserId};
use std::io::Write;

/// Runs the menu until the user picks Exit.
pub fn run(state: &mut AppState, session: &mut Session) {
    println!("Welcome to the Atrium Conference System.");
    loop {
        let options: Vec<UserOption> = session.menu_options();
        println!();
        for (index, option) in options.iter().enumerate() {
            println!("{} - {option}", index + 1);
        }
        let input: String = prompt("Select an option");
        let Some(option) = select_option(&options, &input) else {
            println!("Not an option. Enter a number or the option's name.");
            continue;
        };
        if option == UserOption::Exit {
            break;
        }
        dispatch(option, state, session);
    }
}

#[allow(clippy::too_many_lines)]
fn dispatch(option: UserOption, state: &mut AppState, session: &mut Session) {
    match option {
        UserOption::LogIn => log_in(state, session),
        UserOption::LogOut => {
            session.logout();
            println!("Logged out.");
        }
        UserOption::ExploreAsAGuest => {
            session.login_as_guest();
            println!("You are browsing as a guest. Log in for full access.");
        }
        UserOption::ViewAllEvents => {
            print_result(handlers::list_all_events(state, session), print_event_lines);
        }
        UserOption::ViewAvailableEvents => {
            print_result(
                handlers::list_available_events(state, session),
                print_event_lines,
            );
        }
        UserOption::ViewSignUpEvents => {
            print_result(
                handlers::list_signed_up_events(state, session),
                print_event_lines,
            );
        }
        UserOption::ViewEventsByDay => view_events_by_day(state, session),
        UserOption::ViewEventsBySpeaker => view_events_by_speaker(state, session),
        UserOption::SignUpForEvent => sign_up(state, session),
        UserOption::CancelSpotForEvent => cancel_spot(state, session),
        UserOption::CreateEvent => create_event(state, session, false),
        UserOption::CreateParty => create_event(state, session, true),
        UserOption::CreateUser => create_user(state, session),
        UserOption::ChangeUserType => change_user_type(state, session),
        UserOption::AddRooms => add_room(state, session),
        UserOption::ScheduleSpeakerTalk => schedule_speaker(state, session),
        UserOption::RemoveSpeaker => remove_speaker(state, session),
        UserOption::CancelEvent => cancel_event(state, session),
        UserOption::ChangeCapacity => change_capacity(state, session),
        UserOption::ViewScheduledTalk => {
            print_result(
                handlers::list_scheduled_talks(state, session),
                print_event_lines,
            );
        }
        UserOption::ViewTalkAttendees => view_talk_attendees(state, session),
        UserOption::ViewConferenceStats => {
            print_result(handlers::stats(state, session), |output| {
                println!("{output}");
            });
        }
        UserOption::ViewUserRequests => {
            print_result(handlers::list_requests(state, session), |requests| {
                if requests.is_empty() {
                    println!("There are no pending requests.");
                }
                for request in requests {
                    println!("{}", request.line);
                }
            });
        }
        UserOption::AddressUserRequest => address_request(state, session),
        UserOption::AccessMessaging => messaging_menu(state, session),
        UserOption::SendMessageToAll => message_all(state, session),
        UserOption::SendMessageToEventAttendees => message_event_attendees(state, session),
        UserOption::ManageInterestedEvents => manage_interested(state, session),
        UserOption::ManageFavouriteSpeakers => manage_favourites(state, session),
        UserOption::Exit => {}
    }
}

// ---------------------------------------------------------------------------
// Prompt helpers
// ---------------------------------------------------------------------------

fn prompt(label: &str) -> String {
    print!("{label}: ");
    let _ = std::io::stdout().flush();
    let mut line: String = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_owned()
}

fn print_result<T>(result: Result<T, ApiError>, on_ok: impl FnOnce(T)) {
    match result {
        Ok(value) => on_ok(value),
        Err(err) => println!("{err}"),
    }
}

fn print_message(result: Result<String, ApiError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("{err}"),
    }
}

fn print_event_lines(events: Vec<EventSummary>) {
    if events.is_empty() {
        println!("There are no scheduled events here.");
    }
    for (index, event) in events.iter().enumerate() {
        println!("{} - {}", index + 1, event.line);
    }
}

/// Prints a numbered event list and returns the chosen event, or None on
/// an empty list or a blank/invalid choice.
fn pick_event(events: &[EventSummary]) -> Option<EventId> {
    if events.is_empty() {
        println!("There are no events to choose from.");
        return None;
    }
    for (index, event) in events.iter().enumerate() {
        println!("{} - {}", index + 1, event.line);
    }
    let input: String = prompt("Select an event (blank to go back)");
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(index) if index >= 1 && index <= events.len() => Some(events[index - 1].event_id),
        _ => {
            println!("Not a valid selection.");
            None
        }
    }
}

fn prompt_user_id(state: &AppState, label: &str) -> Option<UserId> {
    let email: String = prompt(label);
    match handlers::find_user_by_email(state, &email) {
        Ok(summary) => Some(summary.user_id),
        Err(err) => {
            println!("{err}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

fn log_in(state: &AppState, session: &mut Session) {
    let email: String = prompt("Email");
    let password: String = prompt("Password");
    match session.login(&state.users, &email, &password) {
        Ok(_) => println!("Logged in."),
        Err(err) => println!("{err}"),
    }
}

// ---------------------------------------------------------------------------
// Event flows
// ---------------------------------------------------------------------------

fn view_events_by_day(state: &AppState, session: &Session) {
    let input: String = prompt("Date (dd/MM/yyyy)");
    match parse_date(&input) {
        Ok(date) => print_result(
            handlers::list_events_by_day(state, session, date),
            print_event_lines,
        ),
        Err(err) => println!("{err}"),
    }
}

fn view_events_by_speaker(state: &AppState, session: &Session) {
    let Some(speaker_id) = prompt_user_id(state, "Speaker's email") else {
        return;
    };
    print_result(
        handlers::list_events_by_speaker(state, session, speaker_id),
        print_event_lines,
    );
}

fn sign_up(state: &mut AppState, session: &Session) {
    let events = match handlers::list_available_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if let Some(event_id) = pick_event(&events) {
        print_message(handlers::sign_up(state, session, event_id));
    }
}

fn cancel_spot(state: &mut AppState, session: &Session) {
    let events = match handlers::list_signed_up_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if let Some(event_id) = pick_event(&events) {
        print_message(handlers::cancel_spot(state, session, event_id));
    }
}

fn create_event(state: &mut AppState, session: &Session, party: bool) {
    let name: String = prompt("Event name");
    let starts_at = match parse_date_time(&prompt("Start (dd/MM/yyyy HH:mm)")) {
        Ok(starts_at) => starts_at,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Ok(capacity) = parse_number(&prompt("Capacity")) else {
        println!("Capacity must be a number.");
        return;
    };
    let Ok(duration) = parse_number(&prompt("Duration in hours")) else {
        println!("Duration must be a number.");
        return;
    };
    let Ok(duration_hours) = u8::try_from(duration) else {
        println!("Duration must be between 1 and 23 hours.");
        return;
    };
    let features = match parse_features(&prompt(
        "Required features, comma-separated (blank for none)",
    )) {
        Ok(features) => features,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    let rooms =
        match handlers::suggest_rooms(state, session, &features, capacity, starts_at, duration_hours)
        {
            Ok(rooms) => rooms,
            Err(err) => {
                println!("{err}");
                return;
            }
        };
    if rooms.is_empty() {
        println!("No room fits that slot, capacity, and feature set.");
        return;
    }
    println!("Rooms able to host this event:");
    for (index, room) in rooms.iter().enumerate() {
        println!("{} - {}", index + 1, room.line);
    }
    let choice: String = prompt("Select a room");
    let room_id = match choice.parse::<usize>() {
        Ok(index) if index >= 1 && index <= rooms.len() => rooms[index - 1].room_id,
        _ => {
            println!("Not a valid selection.");
            return;
        }
    };

    let mut speaker_ids = std::collections::HashSet::new();
    if !party {
        let speakers: String = prompt("Speaker emails, comma-separated (blank for a party)");
        for email in speakers.split(',') {
            let email: &str = email.trim();
            if email.is_empty() {
                continue;
            }
            match handlers::find_user_by_email(state, email) {
                Ok(summary) => {
                    speaker_ids.insert(summary.user_id);
                }
                Err(err) => {
                    println!("{err}");
                    return;
                }
            }
        }
    }

    let request: CreateEventRequest = CreateEventRequest {
        name,
        starts_at,
        room_id,
        speaker_ids,
        capacity,
        duration_hours,
        features,
    };
    let result = if party {
        handlers::create_party(state, session, request)
    } else {
        handlers::create_event(state, session, request)
    };
    print_result(result, |response| println!("{}", response.message));
}

fn schedule_speaker(state: &mut AppState, session: &Session) {
    let events = match handlers::list_all_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Some(event_id) = pick_event(&events) else {
        return;
    };
    let Some(speaker_id) = prompt_user_id(state, "Speaker's email") else {
        return;
    };
    print_message(handlers::schedule_speaker(state, session, event_id, speaker_id));
}

fn remove_speaker(state: &mut AppState, session: &Session) {
    let events = match handlers::list_all_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Some(event_id) = pick_event(&events) else {
        return;
    };
    let Some(speaker_id) = prompt_user_id(state, "Speaker's email") else {
        return;
    };
    print_message(handlers::remove_speaker(state, session, event_id, speaker_id));
}

fn cancel_event(state: &mut AppState, session: &Session) {
    let events = match handlers::list_all_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if let Some(event_id) = pick_event(&events) {
        print_message(handlers::cancel_event(state, session, event_id));
    }
}

fn change_capacity(state: &mut AppState, session: &Session) {
    let events = match handlers::list_all_events(state, session) {
        Ok(events) => events,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Some(event_id) = pick_event(&events) else {
        return;
    };
    let Ok(capacity) = parse_number(&prompt("New capacity")) else {
        println!("Capacity must be a number.");
        return;
    };
    print_message(handlers::change_capacity(state, session, event_id, capacity));
}

fn view_talk_attendees(state: &AppState, session: &Session) {
    let talks = match handlers::list_scheduled_talks(state, session) {
        Ok(talks) => talks,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if let Some(event_id) = pick_event(&talks) {
        print_result(
            handlers::list_talk_attendees(state, session, event_id),
            |attendees| {
                if attendees.is_empty() {
                    println!("Nobody has signed up yet.");
                }
                for attendee in attendees {
                    println!("{}", attendee.line);
                }
            },
        );
    }
}

// ---------------------------------------------------------------------------
// Rooms and users
// ---------------------------------------------------------------------------

fn add_room(state: &mut AppState, session: &Session) {
    let name: String = prompt("Room name");
    let Ok(capacity) = parse_number(&prompt("Capacity")) else {
        println!("Capacity must be a number.");
        return;
    };
    let (Ok(open_raw), Ok(close_raw)) = (
        parse_number(&prompt("Opens at hour (0-22)")),
        parse_number(&prompt("Closes at hour (1-23)")),
    ) else {
        println!("Hours must be numbers.");
        return;
    };
    let (Ok(open_hour), Ok(close_hour)) = (u8::try_from(open_raw), u8::try_from(close_raw))
    else {
        println!("Hours must be between 0 and 23.");
        return;
    };
    let response = handlers::create_room(
        state,
        session,
        CreateRoomRequest {
            name,
            capacity,
            open_hour,
            close_hour,
        },
    );
    let room_id = match response {
        Ok(response) => {
            println!("{}", response.message);
            response.room_id
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    println!("Toggle features for this room. Available:");
    for feature in RoomFeature::ALL {
        println!("  {}", feature.description());
    }
    loop {
        let name: String = prompt("Feature to toggle (blank to finish)");
        if name.is_empty() {
            break;
        }
        print_message(handlers::toggle_room_feature(state, session, room_id, &name));
    }
}

fn create_user(state: &mut AppState, session: &Session) {
    let name: String = prompt("Name");
    let email: String = prompt("Email");
    let password: String = prompt("Password");
    let role = match parse_role(&prompt("Role (Attendee, Organizer, Speaker, VIP)")) {
        Ok(role) => role,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    print_result(
        handlers::create_user(
            state,
            session,
            CreateUserRequest {
                name,
                email,
                password,
                role,
            },
        ),
        |response| println!("{}", response.message),
    );
}

fn change_user_type(state: &mut AppState, session: &Session) {
    let email: String = prompt("User's email");
    let password: String = prompt("User's password");
    let role = match parse_role(&prompt("New role")) {
        Ok(role) => role,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    print_message(handlers::change_user_role(state, session, &email, &password, role));
}

fn address_request(state: &mut AppState, session: &Session) {
    let pending = match handlers::list_requests(state, session) {
        Ok(pending) => pending,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if pending.is_empty() {
        println!("There are no pending requests.");
        return;
    }
    for (index, request) in pending.iter().enumerate() {
        println!("{} - {}", index + 1, request.line);
    }
    let input: String = prompt("Select a request (blank to go back)");
    if input.is_empty() {
        return;
    }
    match input.parse::<usize>() {
        Ok(index) if index >= 1 && index <= pending.len() => {
            print_message(handlers::address_request(
                state,
                session,
                pending[index - 1].request_id,
            ));
        }
        _ => println!("Not a valid selection."),
    }
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

fn messaging_menu(state: &mut AppState, session: &Session) {
    loop {
        println!(
            "\n[Messenger] 1 - View conversations | 2 - Open a conversation | \
             3 - Reply to a conversation | 4 - Send a message | 5 - View friends | \
             6 - Add friend | 7 - Remove friend | 8 - File a request | 9 - Back"
        );
        match prompt("Select").as_str() {
            "1" => print_result(handlers::list_conversations(state, session), |lines| {
                if lines.is_empty() {
                    println!("You have no conversations. Start one by sending a message.");
                }
                for line in lines {
                    println!("{} - {}", line.index, line.line);
                }
            }),
            "2" => {
                if let Ok(index) = parse_number(&prompt("Conversation number")) {
                    print_message(handlers::view_conversation(state, session, index as usize));
                }
            }
            "3" => {
                if let Ok(index) = parse_number(&prompt("Conversation number")) {
                    let content: String = prompt("Reply");
                    print_message(handlers::reply_to_conversation(
                        state,
                        session,
                        index as usize,
                        content,
                    ));
                }
            }
            "4" => {
                let Some(recipient) = prompt_user_id(state, "Recipient's email") else {
                    continue;
                };
                let content: String = prompt("Message");
                print_message(handlers::send_direct_message(
                    state,
                    session,
                    &[recipient],
                    content,
                ));
            }
            "5" => print_result(handlers::list_friends(state, session), |friends| {
                if friends.is_empty() {
                    println!("Your friend list is empty.");
                }
                for friend in friends {
                    println!("{}", friend.line);
                }
            }),
            "6" => {
                let email: String = prompt("Friend's email");
                print_message(handlers::add_friend(state, session, &email));
            }
            "7" => {
                let email: String = prompt("Friend's email");
                print_message(handlers::remove_friend(state, session, &email));
            }
            "8" => {
                let content: String = prompt("Your request");
                print_message(handlers::file_request(state, session, content));
            }
            "9" | "" => break,
            _ => println!("Not an option."),
        }
    }
}

fn message_all(state: &mut AppState, session: &Session) {
    let group = match parse_role(&prompt("Send to which group (Attendee or Speaker)")) {
        Ok(group) => group,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let content: String = prompt("Message");
    print_message(handlers::message_all(state, session, group, content));
}

fn message_event_attendees(state: &mut AppState, session: &Session) {
    let talks = match handlers::list_scheduled_talks(state, session) {
        Ok(talks) => talks,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    if let Some(event_id) = pick_event(&talks) {
        let content: String = prompt("Message");
        print_message(handlers::message_event_attendees(state, session, event_id, content));
    }
}

// ---------------------------------------------------------------------------
// VIP flows
// ---------------------------------------------------------------------------

fn manage_interested(state: &mut AppState, session: &Session) {
    loop {
        println!("\n1 - View interested events | 2 - Add | 3 - Remove | 4 - Back");
        match prompt("Select").as_str() {
            "1" => print_result(
                handlers::list_interested_events(state, session),
                print_event_lines,
            ),
            "2" => {
                let events = match handlers::list_all_events(state, session) {
                    Ok(events) => events,
                    Err(err) => {
                        println!("{err}");
                        return;
                    }
                };
                if let Some(event_id) = pick_event(&events) {
                    print_message(handlers::interested_in_event(state, session, event_id));
                }
            }
            "3" => {
                let events = match handlers::list_interested_events(state, session) {
                    Ok(events) => events,
                    Err(err) => {
                        println!("{err}");
                        return;
                    }
                };
                if let Some(event_id) = pick_event(&events) {
                    print_message(handlers::uninterested_in_event(state, session, event_id));
                }
            }
            "4" | "" => break,
            _ => println!("Not an option."),
        }
    }
}

fn manage_favourites(state: &mut AppState, session: &Session) {
    loop {
        println!("\n1 - View favourite speakers | 2 - Follow | 3 - Unfollow | 4 - Back");
        match prompt("Select").as_str() {
            "1" => print_result(
                handlers::list_favourite_speakers(state, session),
                |speakers| {
                    if speakers.is_empty() {
                        println!("You follow no speakers yet.");
                    }
                    for speaker in speakers {
                        println!("{}", speaker.line);
                    }
                },
            ),
            "2" => {
                if let Some(speaker_id) = prompt_user_id(state, "Speaker's email") {
                    print_message(handlers::like_speaker(state, session, speaker_id));
                }
            }
            "3" => {
                if let Some(speaker_id) = prompt_user_id(state, "Speaker's email") {
                    print_message(handlers::dislike_speaker(state, session, speaker_id));
                }
            }
            "4" | "" => break,
            _ => println!("Not an option."),
        }
    }
}
