use super::*;

#[test]
fn greeting_tracks_time_of_day() {
    assert_eq!(greeting_for_hour(0), "Good Morning");
    assert_eq!(greeting_for_hour(11), "Good Morning");
    assert_eq!(greeting_for_hour(12), "Good Afternoon");
    assert_eq!(greeting_for_hour(16), "Good Afternoon");
    assert_eq!(greeting_for_hour(17), "Good Evening");
    assert_eq!(greeting_for_hour(23), "Good Evening");
}

#[test]
fn employee_links_cover_worksheet_and_payments() {
    let paths: Vec<_> = role_links(Role::Employee).iter().map(|l| l.path).collect();
    assert_eq!(paths, vec!["/work-sheet", "/payment-history"]);
}

#[test]
fn hr_links_include_roster_and_progress() {
    let paths: Vec<_> = role_links(Role::Hr).iter().map(|l| l.path).collect();
    assert!(paths.contains(&"/employee-list"));
    assert!(paths.contains(&"/progress"));
}

#[test]
fn admin_links_cover_roster_and_payroll() {
    let paths: Vec<_> = role_links(Role::Admin).iter().map(|l| l.path).collect();
    assert_eq!(paths, vec!["/all-employee-list", "/payroll"]);
}
