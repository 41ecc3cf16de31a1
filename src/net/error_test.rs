use super::*;

#[test]
fn rejection_message_prefers_server_text() {
    assert_eq!(
        rejection_message(401, Some("Invalid credentials".to_owned())),
        "Invalid credentials"
    );
}

#[test]
fn rejection_message_falls_back_when_body_absent() {
    assert_eq!(rejection_message(500, None), "Request failed with status 500");
}

#[test]
fn rejection_message_falls_back_when_body_blank() {
    assert_eq!(
        rejection_message(400, Some("   ".to_owned())),
        "Request failed with status 400"
    );
}

#[test]
fn rejected_error_displays_message_only() {
    let err = ApiError::Rejected {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
}
