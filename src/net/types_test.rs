use super::*;

// =============================================================
// Role normalization
// =============================================================

#[test]
fn role_parse_accepts_canonical_casing() {
    assert_eq!(Role::parse("Employee"), Some(Role::Employee));
    assert_eq!(Role::parse("HR"), Some(Role::Hr));
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
}

#[test]
fn role_parse_accepts_lowercase_variants() {
    assert_eq!(Role::parse("employee"), Some(Role::Employee));
    assert_eq!(Role::parse("hr"), Some(Role::Hr));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
}

#[test]
fn role_parse_trims_whitespace() {
    assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("manager"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_serializes_canonically() {
    assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"Employee\"");
}

#[test]
fn role_deserialize_normalizes_lowercase_wire_value() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_deserialize_fails_on_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

// =============================================================
// Identity and auth payloads
// =============================================================

#[test]
fn identity_round_trips_through_json() {
    let raw = r#"{
        "_id": "u1",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "role": "HR",
        "photo": "https://example.com/jane.png",
        "bank_account_no": "1234",
        "isVerified": true
    }"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Hr);
    assert!(identity.verified);
    assert_eq!(identity.bank_account.as_deref(), Some("1234"));

    let encoded = serde_json::to_string(&identity).unwrap();
    let decoded: Identity = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, identity);
}

#[test]
fn identity_optional_fields_default() {
    let raw = r#"{"_id": "u2", "name": "John", "email": "john@example.com", "role": "Employee"}"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert!(identity.photo.is_none());
    assert!(identity.salary.is_none());
    assert!(!identity.verified);
}

#[test]
fn auth_success_requires_user_and_token() {
    let raw = r#"{"user": {"_id": "u1", "name": "J", "email": "j@e.com", "role": "Employee"}, "token": "t1"}"#;
    let auth: AuthSuccess = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.token, "t1");
    assert_eq!(auth.user.role, Role::Employee);

    assert!(serde_json::from_str::<AuthSuccess>(r#"{"token": "t1"}"#).is_err());
    assert!(serde_json::from_str::<AuthSuccess>(r#"{"user": null, "token": "t1"}"#).is_err());
}

#[test]
fn register_request_omits_absent_optionals() {
    let request = RegisterRequest {
        name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "Secret@1".to_owned(),
        role: Role::Employee,
        bank_account: None,
        salary: None,
        designation: None,
        photo: None,
    };
    let encoded = serde_json::to_value(&request).unwrap();
    assert!(encoded.get("bank_account_no").is_none());
    assert!(encoded.get("salary").is_none());
    assert_eq!(encoded["role"], "Employee");
}

// =============================================================
// Domain envelopes
// =============================================================

#[test]
fn work_sheet_list_uses_camel_case_envelope() {
    let raw = r#"{"workSheets": [{"_id": "w1", "task": "Sales", "hoursWorked": 6.5, "date": "2025-07-01"}]}"#;
    let list: WorkSheetListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(list.work_sheets.len(), 1);
    assert_eq!(list.work_sheets[0].hours_worked, 6.5);
    assert!(list.work_sheets[0].employee_email.is_none());
}

#[test]
fn work_sheet_input_serializes_camel_case_hours() {
    let input = WorkSheetInput {
        task: "Support".to_owned(),
        hours_worked: 8.0,
        date: "2025-07-02".to_owned(),
    };
    let encoded = serde_json::to_value(&input).unwrap();
    assert_eq!(encoded["hoursWorked"], 8.0);
}

#[test]
fn payroll_request_parses_status_and_dates() {
    let raw = r#"{
        "_id": "p1",
        "employeeName": "John Smith",
        "employeeEmail": "john@company.com",
        "salary": 75000,
        "month": "January",
        "year": 2025,
        "status": "completed",
        "paymentDate": "2025-01-31"
    }"#;
    let request: PayrollRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.status, PayrollStatus::Completed);
    assert_eq!(request.payment_date.as_deref(), Some("2025-01-31"));
}

#[test]
fn payroll_status_rejects_unknown_state() {
    assert!(serde_json::from_str::<PayrollStatus>("\"queued\"").is_err());
}

#[test]
fn salary_update_uses_backend_field_name() {
    let encoded = serde_json::to_value(&SalaryUpdate { new_salary: 80000.0 }).unwrap();
    assert_eq!(encoded["newSalary"], 80000.0);
}
