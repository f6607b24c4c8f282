use super::*;

#[test]
fn enter_without_shift_submits() {
    assert_eq!(key_action("Enter", false), KeyAction::Submit);
}

#[test]
fn shift_enter_inserts_newline() {
    assert_eq!(key_action("Enter", true), KeyAction::Default);
}

#[test]
fn other_keys_are_default() {
    assert_eq!(key_action("a", false), KeyAction::Default);
    assert_eq!(key_action("Tab", false), KeyAction::Default);
    assert_eq!(key_action("NumpadEnter", false), KeyAction::Default);
}

#[test]
fn key_match_is_case_sensitive() {
    assert_eq!(key_action("enter", false), KeyAction::Default);
}
