use super::*;

#[test]
fn form_body_uses_question_field() {
    assert_eq!(form_body("hello%20coach"), "question=hello%20coach");
}

#[test]
fn form_body_keeps_empty_value() {
    assert_eq!(form_body(""), "question=");
}

#[test]
fn non_success_status_message_formats_status() {
    assert_eq!(non_success_status_message(500), "chat endpoint answered with status 500");
}

#[test]
fn form_content_type_is_urlencoded() {
    assert_eq!(FORM_CONTENT_TYPE, "application/x-www-form-urlencoded");
}

#[tokio::test]
async fn ask_without_browser_reports_network_error() {
    let outcome = ask("/chat/ask", "hello").await;
    assert!(matches!(outcome, Err(AskError::Network(_))));
}
