use super::*;

#[test]
fn credential_endpoints_match_backend_contract() {
    assert_eq!(LOGIN_ENDPOINT, "/login");
    assert_eq!(REGISTER_ENDPOINT, "/register");
}

#[test]
fn login_success_shape_parses_into_session_halves() {
    let raw = r#"{"user": {"_id": "u1", "name": "John", "email": "john@example.com", "role": "Employee"}, "token": "t1"}"#;
    let auth: AuthSuccess = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.user.role, crate::net::types::Role::Employee);
    assert_eq!(auth.token, "t1");
}

#[test]
fn rejected_login_keeps_server_message_for_display() {
    let error = ApiError::Rejected {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(error.to_string(), "Invalid credentials");
}
