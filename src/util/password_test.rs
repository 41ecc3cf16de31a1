use super::*;

#[test]
fn strong_password_passes() {
    assert!(validate_password("Password@123").is_empty());
}

#[test]
fn short_password_flagged() {
    let errors = validate_password("A@1");
    assert!(errors.contains(&"Password must be at least 6 characters"));
}

#[test]
fn missing_uppercase_flagged() {
    let errors = validate_password("password@123");
    assert_eq!(errors, vec!["Password must contain at least one uppercase letter"]);
}

#[test]
fn missing_special_character_flagged() {
    let errors = validate_password("Password123");
    assert_eq!(errors, vec!["Password must contain at least one special character"]);
}

#[test]
fn empty_password_violates_every_rule() {
    assert_eq!(validate_password("").len(), 3);
}
