// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::options::{
    ATTENDEE_OPTIONS, GUEST_OPTIONS, UserOption, options_for, select_option,
};
use atrium_domain::UserRole;

#[test]
fn test_roles_extend_the_attendee_set() {
    for role in [UserRole::Organizer, UserRole::Speaker, UserRole::Vip] {
        let options = options_for(role);
        for option in ATTENDEE_OPTIONS {
            assert!(options.contains(&option), "{role} lacks {option}");
        }
    }
    assert_eq!(options_for(UserRole::Guest), GUEST_OPTIONS.to_vec());
}

#[test]
fn test_role_exclusive_options() {
    assert!(options_for(UserRole::Organizer).contains(&UserOption::CancelEvent));
    assert!(!options_for(UserRole::Attendee).contains(&UserOption::CancelEvent));
    assert!(options_for(UserRole::Vip).contains(&UserOption::CreateParty));
    assert!(!options_for(UserRole::Organizer).contains(&UserOption::CreateParty));
    assert!(options_for(UserRole::Speaker).contains(&UserOption::ViewScheduledTalk));
    assert!(!options_for(UserRole::Guest).contains(&UserOption::SignUpForEvent));
}

#[test]
fn test_select_by_index_is_one_based() {
    let options = options_for(UserRole::Attendee);
    assert_eq!(select_option(&options, "1"), Some(options[0]));
    assert_eq!(
        select_option(&options, &options.len().to_string()),
        Some(options[options.len() - 1])
    );
    assert_eq!(select_option(&options, "0"), None);
    assert_eq!(select_option(&options, "99"), None);
}

#[test]
fn test_select_by_label_ignores_case() {
    let options = options_for(UserRole::Attendee);
    assert_eq!(
        select_option(&options, "sign up for event"),
        Some(UserOption::SignUpForEvent)
    );
    assert_eq!(
        select_option(&options, "  SIGN UP FOR EVENT  "),
        Some(UserOption::SignUpForEvent)
    );
    assert_eq!(select_option(&options, "make me admin"), None);
}
