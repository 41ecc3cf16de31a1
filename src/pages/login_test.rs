use super::*;

#[test]
fn validate_login_input_trims_email() {
    let request = validate_login_input("  user@example.com  ", "secret").unwrap();
    assert_eq!(request.email, "user@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert!(validate_login_input("", "secret").is_err());
    assert!(validate_login_input("user@example.com", "").is_err());
    assert!(validate_login_input("   ", "secret").is_err());
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("a@b.com", "  spaced  ").unwrap();
    assert_eq!(request.password, "  spaced  ");
}
