use super::*;

fn sample_identity() -> Identity {
    serde_json::from_str(
        r#"{"_id": "u1", "name": "Jane", "email": "jane@example.com", "role": "HR"}"#,
    )
    .unwrap()
}

// =============================================================
// Durable storage codec
// =============================================================

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(IDENTITY_KEY, TOKEN_KEY);
}

#[test]
fn decode_requires_both_entries() {
    let encoded = encode_identity(&sample_identity()).unwrap();
    assert!(decode_stored(Some(&encoded), None).is_none());
    assert!(decode_stored(None, Some("t1")).is_none());
    assert!(decode_stored(None, None).is_none());
}

#[test]
fn decode_round_trips_last_set_value() {
    let identity = sample_identity();
    let encoded = encode_identity(&identity).unwrap();
    let restored = decode_stored(Some(&encoded), Some("t1")).unwrap();
    assert_eq!(restored.identity, identity);
    assert_eq!(restored.token, "t1");
}

#[test]
fn decode_treats_corrupt_identity_as_absent() {
    assert!(decode_stored(Some("{not json"), Some("t1")).is_none());
    assert!(decode_stored(Some("42"), Some("t1")).is_none());
}

#[test]
fn decode_treats_unknown_role_as_absent() {
    let raw = r#"{"_id": "u1", "name": "J", "email": "j@e.com", "role": "superuser"}"#;
    assert!(decode_stored(Some(raw), Some("t1")).is_none());
}

#[test]
fn decode_rejects_empty_token() {
    let encoded = encode_identity(&sample_identity()).unwrap();
    assert!(decode_stored(Some(&encoded), Some("")).is_none());
}

#[test]
fn decode_normalizes_legacy_role_casing() {
    let raw = r#"{"_id": "u1", "name": "J", "email": "j@e.com", "role": "admin"}"#;
    let restored = decode_stored(Some(raw), Some("t1")).unwrap();
    assert_eq!(restored.identity.role, Role::Admin);
}
