use super::*;

#[test]
fn dashboard_target_is_role_specific() {
    assert_eq!(dashboard_target(Some(Role::Employee)), "/work-sheet");
    assert_eq!(dashboard_target(Some(Role::Hr)), "/employee-list");
    assert_eq!(dashboard_target(Some(Role::Admin)), "/all-employee-list");
}

#[test]
fn dashboard_target_falls_back_when_logged_out() {
    assert_eq!(dashboard_target(None), "/dashboard");
}
