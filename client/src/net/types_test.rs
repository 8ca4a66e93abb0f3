use super::*;

// =============================================================
// ActivityCollection decoding
// =============================================================

#[test]
fn collection_preserves_response_key_order() {
    let raw = r#"{
        "Zumba": {"description": "Dance", "schedule": "Mon", "max_participants": 10, "participants": []},
        "Art Club": {"description": "Paint", "schedule": "Tue", "max_participants": 5, "participants": ["a@x.edu"]},
        "Math Team": {"description": "Proofs", "schedule": "Wed", "max_participants": 8, "participants": []}
    }"#;
    let collection: ActivityCollection = serde_json::from_str(raw).unwrap();
    assert_eq!(collection.names(), vec!["Zumba", "Art Club", "Math Team"]);
}

#[test]
fn collection_decodes_activity_fields() {
    let raw = r#"{"Chess Club": {"description": "Learn strategies", "schedule": "Fridays", "max_participants": 12, "participants": ["michael@mergington.edu", "daniel@mergington.edu"]}}"#;
    let collection: ActivityCollection = serde_json::from_str(raw).unwrap();
    let entry = &collection.entries()[0];
    assert_eq!(entry.name, "Chess Club");
    assert_eq!(entry.activity.description, "Learn strategies");
    assert_eq!(entry.activity.schedule, "Fridays");
    assert_eq!(entry.activity.max_participants, 12);
    assert_eq!(entry.activity.participants, vec!["michael@mergington.edu", "daniel@mergington.edu"]);
}

#[test]
fn collection_empty_object_is_empty() {
    let collection: ActivityCollection = serde_json::from_str("{}").unwrap();
    assert!(collection.entries().is_empty());
}

#[test]
fn collection_rejects_array_body() {
    assert!(serde_json::from_str::<ActivityCollection>("[]").is_err());
}

#[test]
fn collection_rejects_activity_missing_capacity() {
    let raw = r#"{"X": {"description": "d", "schedule": "s", "participants": []}}"#;
    assert!(serde_json::from_str::<ActivityCollection>(raw).is_err());
}

#[test]
fn collection_missing_participants_defaults_to_empty() {
    let raw = r#"{"X": {"description": "d", "schedule": "s", "max_participants": 3}}"#;
    let collection: ActivityCollection = serde_json::from_str(raw).unwrap();
    assert!(collection.entries()[0].activity.participants.is_empty());
}

// =============================================================
// Activity derived values
// =============================================================

fn activity(max: i64, participants: &[&str]) -> Activity {
    Activity {
        description: String::new(),
        schedule: String::new(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

#[test]
fn spots_left_subtracts_roster_size() {
    assert_eq!(activity(12, &["a", "b"]).spots_left(), 10);
}

#[test]
fn spots_left_can_be_negative() {
    assert_eq!(activity(1, &["a", "b", "c"]).spots_left(), -2);
}

#[test]
fn spots_left_zero_when_full() {
    assert_eq!(activity(2, &["a", "b"]).spots_left(), 0);
}

// =============================================================
// ActionBody
// =============================================================

#[test]
fn action_body_reads_message() {
    let body: ActionBody = serde_json::from_str(r#"{"message": "Signed up"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Signed up"));
    assert!(body.detail.is_none());
}

#[test]
fn action_body_reads_detail() {
    let body: ActionBody = serde_json::from_str(r#"{"detail": "Activity is full"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("Activity is full"));
    assert!(body.message.is_none());
}

#[test]
fn action_body_tolerates_unknown_fields() {
    let body: ActionBody = serde_json::from_str(r#"{"ok": true}"#).unwrap();
    assert_eq!(body, ActionBody::default());
}
