use super::*;
use crate::state::chat::Origin;

fn with_controller(test: impl FnOnce(ChatController)) {
    let owner = Owner::new();
    owner.with(|| test(ChatController::new(ChatState::default(), ChatConfig::default())));
}

fn texts(controller: ChatController) -> Vec<String> {
    controller
        .chat()
        .with_untracked(|c| c.messages.iter().map(|m| m.text.clone()).collect())
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_blank_keeps_input_and_appends_nothing() {
    with_controller(|controller| {
        controller.input().set("   ".to_owned());
        controller.submit();
        assert_eq!(controller.input().get_untracked(), "   ");
        assert!(texts(controller).is_empty());
        assert!(!controller.chat().with_untracked(|c| c.waiting));
    });
}

#[test]
fn submit_clears_input_and_shows_indicator() {
    with_controller(|controller| {
        controller.input().set("hello".to_owned());
        controller.submit();
        assert_eq!(controller.input().get_untracked(), "");
        assert_eq!(texts(controller), vec!["hello"]);
        assert!(controller.chat().with_untracked(|c| c.waiting));
    });
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_answer_appends_bot_reply() {
    with_controller(|controller| {
        controller.input().set("hello".to_owned());
        controller.submit();
        controller.settle(Ok(AskReply::Answer("hi there".to_owned())));

        let state = controller.chat().get_untracked();
        assert!(!state.waiting);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].origin, Origin::Bot);
        assert_eq!(state.messages[1].text, "hi there");
    });
}

#[test]
fn settle_failure_appends_prefixed_error() {
    with_controller(|controller| {
        controller.input().set("hello".to_owned());
        controller.submit();
        controller.settle(Ok(AskReply::Failure("rate limited".to_owned())));
        assert_eq!(texts(controller), vec!["hello", "Error: rate limited"]);
    });
}

#[test]
fn settle_transport_error_uses_configured_fallback() {
    let owner = Owner::new();
    owner.with(|| {
        let config = ChatConfig { fallback_text: "Coach is offline.".to_owned(), ..ChatConfig::default() };
        let controller = ChatController::new(ChatState::default(), config);
        controller.input().set("hello".to_owned());
        controller.submit();
        controller.settle(Err(AskError::Network("connection refused".to_owned())));

        assert_eq!(texts(controller), vec!["hello", "Coach is offline."]);
        assert!(!controller.chat().with_untracked(|c| c.waiting));
    });
}

#[test]
fn controller_starts_from_history() {
    let owner = Owner::new();
    owner.with(|| {
        let history = vec![ChatMessage::new(Origin::Bot, "Welcome back!", 0.0)];
        let controller = ChatController::new(ChatState::with_history(history), ChatConfig::default());
        assert_eq!(texts(controller), vec!["Welcome back!"]);
    });
}

// =============================================================
// Disposed widget
// =============================================================

#[test]
fn settle_after_dispose_is_dropped_without_panic() {
    let owner = Owner::new();
    let controller = owner.with(|| ChatController::new(ChatState::default(), ChatConfig::default()));
    drop(owner);

    controller.settle(Err(AskError::Network("late".to_owned())));
    controller.settle(Ok(AskReply::Answer("late answer".to_owned())));
    controller.settle(Ok(AskReply::Failure("late error".to_owned())));
}

#[test]
fn submit_after_dispose_is_ignored() {
    let owner = Owner::new();
    let controller = owner.with(|| ChatController::new(ChatState::default(), ChatConfig::default()));
    drop(owner);

    controller.submit();
    controller.on_key("Enter", false);
    assert!(controller.chat().try_get_untracked().is_none());
    assert!(controller.scroll_requests().try_get_untracked().is_none());
}

// =============================================================
// Scroll requests
// =============================================================

fn scrolls(controller: ChatController) -> u64 {
    controller.scroll_requests().get_untracked()
}

#[test]
fn scroll_requested_at_mount_and_after_each_append() {
    with_controller(|controller| {
        assert_eq!(scrolls(controller), 0);

        controller.mount();
        assert_eq!(scrolls(controller), 1);

        controller.input().set("hello".to_owned());
        controller.submit();
        assert_eq!(scrolls(controller), 2);

        controller.settle(Ok(AskReply::Answer("hi there".to_owned())));
        assert_eq!(scrolls(controller), 3);

        controller.settle(Err(AskError::Decode("bad".to_owned())));
        assert_eq!(scrolls(controller), 4);
    });
}

#[test]
fn blank_submit_requests_no_scroll() {
    with_controller(|controller| {
        controller.input().set("  ".to_owned());
        controller.submit();
        assert_eq!(scrolls(controller), 0);
    });
}

#[test]
fn bottom_scroll_top_is_maximum_extent() {
    assert_eq!(bottom_scroll_top(1200, 400), 800);
    assert_eq!(bottom_scroll_top(400, 400), 0);
    assert_eq!(bottom_scroll_top(100, 400), 0);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn enter_submits_and_suppresses_default() {
    with_controller(|controller| {
        controller.input().set("hello".to_owned());
        assert!(controller.on_key("Enter", false));
        assert_eq!(texts(controller), vec!["hello"]);
        assert_eq!(controller.input().get_untracked(), "");
    });
}

#[test]
fn shift_enter_keeps_default_and_does_not_submit() {
    with_controller(|controller| {
        controller.input().set("line one".to_owned());
        assert!(!controller.on_key("Enter", true));
        assert!(texts(controller).is_empty());
        assert_eq!(controller.input().get_untracked(), "line one");
    });
}

#[test]
fn enter_on_blank_input_still_suppresses_newline() {
    with_controller(|controller| {
        assert!(controller.on_key("Enter", false));
        assert!(texts(controller).is_empty());
    });
}
