//! Integration tests for the presentation-facing feed types
//!
//! The snapshot is consumed by a JavaScript front end, so key casing and
//! enum labels are part of the contract.

use inferno_domain::{FeedSnapshot, Profile, RelationshipType, SwipeDecision};
use serde_json::{json, Value};

#[test]
fn test_snapshot_json_uses_camel_case_keys() {
    let snapshot = FeedSnapshot {
        current_profile: Some(Profile::new("Aria", 27)),
        queue_len: 5,
        loading: true,
        boost_active: true,
        boost_countdown: Some("14:59".into()),
        ..FeedSnapshot::default()
    };

    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["queueLen"], json!(5));
    assert_eq!(value["boostCountdown"], json!("14:59"));
    assert_eq!(value["canRewind"], json!(false));
    assert_eq!(value["filtersActive"], json!(false));
    assert_eq!(value["nextProfile"], Value::Null);
    assert_eq!(value["currentProfile"]["name"], json!("Aria"));
    assert_eq!(value["currentProfile"]["relationshipType"], json!("exploring"));
    assert!(value["currentProfile"].get("heightCm").is_some());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let snapshot = FeedSnapshot {
        current_profile: Some(Profile::new("Zoe", 31)),
        next_profile: Some(Profile::new("Logan", 29)),
        queue_len: 2,
        can_rewind: true,
        ..FeedSnapshot::default()
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FeedSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert!(back.rewind_enabled());
}

#[test]
fn test_labels_parse_case_insensitively() {
    assert_eq!("SUPER_LIKE".parse::<SwipeDecision>().unwrap(), SwipeDecision::SuperLike);
    assert_eq!("Polyamorous".parse::<RelationshipType>().unwrap(), RelationshipType::Polyamorous);
    assert!("maybe".parse::<SwipeDecision>().is_err());
}
