use super::*;

#[test]
fn work_sheet_endpoint_formats_expected_path() {
    assert_eq!(work_sheet_endpoint("w123"), "/work-sheets/w123");
}

#[test]
fn user_action_endpoints_format_expected_paths() {
    assert_eq!(verify_endpoint("u1"), "/users/u1/verify");
    assert_eq!(fire_endpoint("u1"), "/users/u1/fire");
    assert_eq!(make_hr_endpoint("u1"), "/users/u1/make-hr");
    assert_eq!(salary_endpoint("u1"), "/users/u1/salary");
}

#[test]
fn employee_details_endpoint_formats_expected_path() {
    assert_eq!(employee_details_endpoint("u9"), "/employee-details/u9");
}

#[test]
fn payroll_approve_endpoint_formats_expected_path() {
    assert_eq!(payroll_approve_endpoint("p7"), "/payroll/requests/p7/approve");
}
