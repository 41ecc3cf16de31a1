use super::*;

fn valid_request() -> Result<RegisterRequest, String> {
    build_register_request(
        "Jane Doe",
        "jane@example.com",
        "Password@123",
        "Password@123",
        "HR",
        "",
        "",
        "",
        "",
    )
}

#[test]
fn valid_form_builds_request() {
    let request = valid_request().unwrap();
    assert_eq!(request.role, Role::Hr);
    assert!(request.bank_account.is_none());
    assert!(request.salary.is_none());
}

#[test]
fn weak_password_reports_rules() {
    let result = build_register_request(
        "Jane", "jane@example.com", "pass", "pass", "HR", "", "", "", "",
    );
    let message = result.unwrap_err();
    assert!(message.contains("at least 6 characters"));
    assert!(message.contains("uppercase"));
}

#[test]
fn mismatched_confirmation_rejected() {
    let result = build_register_request(
        "Jane", "jane@example.com", "Password@123", "Password@124", "HR", "", "", "", "",
    );
    assert_eq!(result.unwrap_err(), "Passwords do not match.");
}

#[test]
fn admin_role_is_not_self_service() {
    let result = build_register_request(
        "Jane", "jane@example.com", "Password@123", "Password@123", "Admin", "", "", "", "",
    );
    assert_eq!(result.unwrap_err(), "Select a role.");
}

#[test]
fn missing_role_rejected() {
    let result = build_register_request(
        "Jane", "jane@example.com", "Password@123", "Password@123", "", "", "", "", "",
    );
    assert_eq!(result.unwrap_err(), "Select a role.");
}

#[test]
fn non_numeric_salary_rejected() {
    let result = build_register_request(
        "Jane", "jane@example.com", "Password@123", "Password@123", "Employee", "", "lots", "", "",
    );
    assert_eq!(result.unwrap_err(), "Salary must be a number.");
}

#[test]
fn optional_fields_trim_to_none_or_value() {
    let request = build_register_request(
        "Jane",
        "jane@example.com",
        "Password@123",
        "Password@123",
        "Employee",
        " 1234 ",
        "55000",
        "  ",
        "https://example.com/p.png",
    )
    .unwrap();
    assert_eq!(request.bank_account.as_deref(), Some("1234"));
    assert_eq!(request.salary, Some(55000.0));
    assert!(request.designation.is_none());
    assert_eq!(request.photo.as_deref(), Some("https://example.com/p.png"));
}
