use super::*;

fn sheet(email: &str, date: &str, hours: f64) -> WorkSheet {
    WorkSheet {
        id: format!("{email}-{date}"),
        task: "Support".to_owned(),
        hours_worked: hours,
        date: date.to_owned(),
        employee_email: Some(email.to_owned()),
    }
}

fn employee(name: &str, email: &str) -> EmployeeSummary {
    EmployeeSummary {
        id: email.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        photo: None,
        verified: true,
        bank_account: None,
        salary: None,
    }
}

#[test]
fn no_filters_keeps_every_entry() {
    let sheets = vec![sheet("a@e.com", "2025-01-05", 4.0), sheet("b@e.com", "2025-02-05", 2.0)];
    assert_eq!(filter_work_sheets(&sheets, "", None).len(), 2);
}

#[test]
fn employee_filter_matches_owner_email() {
    let sheets = vec![sheet("a@e.com", "2025-01-05", 4.0), sheet("b@e.com", "2025-02-05", 2.0)];
    let filtered = filter_work_sheets(&sheets, "a@e.com", None);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].employee_email.as_deref(), Some("a@e.com"));
}

#[test]
fn month_filter_is_zero_based() {
    let sheets = vec![sheet("a@e.com", "2025-01-05", 4.0), sheet("a@e.com", "2025-03-10", 2.0)];
    let filtered = filter_work_sheets(&sheets, "", Some(2));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, "2025-03-10");
}

#[test]
fn filters_combine() {
    let sheets = vec![
        sheet("a@e.com", "2025-01-05", 4.0),
        sheet("a@e.com", "2025-03-10", 2.0),
        sheet("b@e.com", "2025-03-12", 8.0),
    ];
    let filtered = filter_work_sheets(&sheets, "a@e.com", Some(2));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "a@e.com-2025-03-10");
}

#[test]
fn total_hours_sums_filtered_entries() {
    let sheets = vec![sheet("a@e.com", "2025-01-05", 4.5), sheet("b@e.com", "2025-02-05", 2.5)];
    assert_eq!(total_hours(&sheets), 7.0);
}

#[test]
fn employee_name_falls_back_to_email() {
    let roster = vec![employee("Jane", "jane@e.com")];
    assert_eq!(employee_name(&roster, "jane@e.com"), "Jane");
    assert_eq!(employee_name(&roster, "ghost@e.com"), "ghost@e.com");
}
