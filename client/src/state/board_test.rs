use super::*;
use crate::net::types::Activity;

fn entry(name: &str, participants: &[&str]) -> ActivityEntry {
    ActivityEntry {
        name: name.to_owned(),
        activity: Activity {
            description: format!("{name} description"),
            schedule: "Fridays".to_owned(),
            max_participants: 10,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        },
    }
}

fn collection(entries: Vec<ActivityEntry>) -> ActivityCollection {
    ActivityCollection(entries)
}

// =============================================================
// BoardState defaults
// =============================================================

#[test]
fn board_state_default_is_loading() {
    let state = BoardState::default();
    assert_eq!(state.list, ActivityList::Loading);
    assert!(state.options.is_empty());
    assert_eq!(state.message.class(), "hidden");
}

// =============================================================
// apply_fetch
// =============================================================

#[test]
fn apply_fetch_success_replaces_list_and_options() {
    let mut state = BoardState::default();
    state.apply_fetch(Ok(collection(vec![entry("Chess Club", &[]), entry("Gym Class", &[])])));
    state.apply_fetch(Ok(collection(vec![entry("Drama", &["a@x.edu"])])));

    assert_eq!(state.options, vec!["Drama"]);
    match &state.list {
        ActivityList::Loaded(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].name, "Drama");
        }
        other => panic!("expected loaded list, got {other:?}"),
    }
}

#[test]
fn apply_fetch_success_keeps_response_order() {
    let mut state = BoardState::default();
    state.apply_fetch(Ok(collection(vec![entry("Zeta", &[]), entry("Alpha", &[]), entry("Mid", &[])])));
    assert_eq!(state.options, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn apply_fetch_failure_shows_fallback_and_keeps_options() {
    let mut state = BoardState::default();
    state.apply_fetch(Ok(collection(vec![entry("Chess Club", &[])])));
    state.apply_fetch(Err(ApiError::Status(500)));

    assert_eq!(state.list, ActivityList::Failed);
    assert_eq!(state.options, vec!["Chess Club"]);
}

#[test]
fn apply_fetch_failure_from_loading() {
    let mut state = BoardState::default();
    state.apply_fetch(Err(ApiError::Decode("expected map".into())));
    assert_eq!(state.list, ActivityList::Failed);
}

#[test]
fn refetch_after_removal_renders_shorter_roster() {
    let mut state = BoardState::default();
    state.apply_fetch(Ok(collection(vec![entry("Chess Club", &["a@x.edu", "b@x.edu"])])));
    state.apply_fetch(Ok(collection(vec![entry("Chess Club", &["b@x.edu"])])));

    match &state.list {
        ActivityList::Loaded(entries) => assert_eq!(entries[0].activity.participants, vec!["b@x.edu"]),
        other => panic!("expected loaded list, got {other:?}"),
    }
}

// =============================================================
// Message area
// =============================================================

#[test]
fn message_area_default_class_is_hidden() {
    assert_eq!(MessageArea::default().class(), "hidden");
}

#[test]
fn show_message_makes_it_visible_with_kind_class() {
    let mut state = BoardState::default();
    state.show_message(Message::success("Signed up", 5000));
    assert!(!state.message.hidden);
    assert_eq!(state.message.text(), "Signed up");
    assert_eq!(state.message.class(), "message success");
}

#[test]
fn hide_message_keeps_text_and_adds_hidden_class() {
    let mut state = BoardState::default();
    let generation = state.show_message(Message::error("Activity is full", Some(5000)));
    assert!(state.hide_message(generation));
    assert!(state.message.hidden);
    assert_eq!(state.message.text(), "Activity is full");
    assert_eq!(state.message.class(), "message error hidden");
}

#[test]
fn stale_hide_does_not_hide_newer_message() {
    let mut state = BoardState::default();
    let first = state.show_message(Message::success("Signed up", 5000));
    let _second = state.show_message(Message::error("Failed to remove participant", None));

    assert!(!state.hide_message(first));
    assert_eq!(state.message.class(), "message error");
    assert_eq!(state.message.text(), "Failed to remove participant");
}

#[test]
fn show_message_increments_generation() {
    let mut state = BoardState::default();
    let a = state.show_message(Message::success("a", 4000));
    let b = state.show_message(Message::success("b", 4000));
    assert!(b > a);
}

#[test]
fn message_kind_classes_are_distinct() {
    assert_eq!(MessageKind::Success.class(), "message success");
    assert_eq!(MessageKind::Error.class(), "message error");
}
