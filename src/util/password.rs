//! Registration password rules.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Check a candidate password, returning every violated rule.
pub fn validate_password(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters");
    }
    if !password.chars().any(|ch| ch.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
        errors.push("Password must contain at least one special character");
    }
    errors
}
