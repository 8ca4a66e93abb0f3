use super::*;
use crate::net::types::ActionBody;
use crate::state::board::MessageKind;

fn response(ok: bool, body: Option<ActionBody>) -> Result<MutationResponse, ApiError> {
    Ok(MutationResponse { ok, body })
}

fn message(text: &str) -> Option<ActionBody> {
    Some(ActionBody { message: Some(text.to_owned()), detail: None })
}

fn detail(text: &str) -> Option<ActionBody> {
    Some(ActionBody { message: None, detail: Some(text.to_owned()) })
}

fn target() -> RemovalTarget {
    RemovalTarget { activity: "Chess Club".to_owned(), participant: "michael@mergington.edu".to_owned() }
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_success_shows_server_message_and_refreshes() {
    let fb = signup_feedback(&response(true, message("Signed up new@mergington.edu for Chess Club")));
    assert_eq!(fb.message.text, "Signed up new@mergington.edu for Chess Club");
    assert_eq!(fb.message.kind, MessageKind::Success);
    assert_eq!(fb.message.hide_after_ms, Some(5000));
    assert!(fb.refetch);
    assert!(fb.reset_form);
}

#[test]
fn signup_failure_shows_detail_and_keeps_form() {
    let fb = signup_feedback(&response(false, detail("Activity is full")));
    assert_eq!(fb.message.text, "Activity is full");
    assert_eq!(fb.message.kind, MessageKind::Error);
    assert_eq!(fb.message.hide_after_ms, Some(5000));
    assert!(!fb.refetch);
    assert!(!fb.reset_form);
}

#[test]
fn signup_failure_without_detail_uses_fallback() {
    let fb = signup_feedback(&response(false, Some(ActionBody::default())));
    assert_eq!(fb.message.text, SIGNUP_FALLBACK_ERROR);
    assert_eq!(fb.message.hide_after_ms, Some(5000));
}

#[test]
fn signup_failure_with_empty_detail_uses_fallback() {
    let fb = signup_feedback(&response(false, detail("")));
    assert_eq!(fb.message.text, "An error occurred");
}

#[test]
fn signup_unparseable_body_reports_transport_error() {
    let fb = signup_feedback(&response(false, None));
    assert_eq!(fb.message.text, SIGNUP_TRANSPORT_ERROR);
    assert_eq!(fb.message.hide_after_ms, None);
    assert!(!fb.refetch);
}

#[test]
fn signup_transport_error_is_not_auto_hidden() {
    let fb = signup_feedback(&Err(ApiError::Transport("offline".into())));
    assert_eq!(fb.message.text, "Failed to sign up. Please try again.");
    assert_eq!(fb.message.kind, MessageKind::Error);
    assert_eq!(fb.message.hide_after_ms, None);
    assert!(!fb.refetch);
    assert!(!fb.reset_form);
}

// =============================================================
// Removal
// =============================================================

#[test]
fn removal_success_uses_server_message() {
    let fb = removal_feedback(&target(), &response(true, message("Unregistered michael@mergington.edu from Chess Club")));
    assert_eq!(fb.message.text, "Unregistered michael@mergington.edu from Chess Club");
    assert_eq!(fb.message.kind, MessageKind::Success);
    assert_eq!(fb.message.hide_after_ms, Some(4000));
    assert!(fb.refetch);
    assert!(!fb.reset_form);
}

#[test]
fn removal_success_without_message_uses_generated_fallback() {
    let fb = removal_feedback(&target(), &response(true, None));
    assert_eq!(fb.message.text, "michael@mergington.edu unregistered from Chess Club");
    assert_eq!(fb.message.hide_after_ms, Some(4000));
    assert!(fb.refetch);
}

#[test]
fn removal_failure_persists_detail_without_refetch() {
    let fb = removal_feedback(&target(), &response(false, detail("Student is not signed up for this activity")));
    assert_eq!(fb.message.text, "Student is not signed up for this activity");
    assert_eq!(fb.message.kind, MessageKind::Error);
    assert_eq!(fb.message.hide_after_ms, None);
    assert!(!fb.refetch);
}

#[test]
fn removal_failure_unparseable_body_uses_fallback() {
    let fb = removal_feedback(&target(), &response(false, None));
    assert_eq!(fb.message.text, REMOVAL_FALLBACK_ERROR);
    assert_eq!(fb.message.hide_after_ms, None);
}

#[test]
fn removal_transport_error_persists() {
    let fb = removal_feedback(&target(), &Err(ApiError::Transport("offline".into())));
    assert_eq!(fb.message.text, "Failed to remove participant. Try again.");
    assert_eq!(fb.message.hide_after_ms, None);
    assert!(!fb.refetch);
}

#[test]
fn signup_and_removal_durations_differ() {
    assert_eq!(SIGNUP_MESSAGE_MS, 5000);
    assert_eq!(REMOVAL_MESSAGE_MS, 4000);
}

#[test]
fn removal_prompt_names_participant_and_activity() {
    assert_eq!(removal_prompt(&target()), "Remove michael@mergington.edu from Chess Club?");
}
