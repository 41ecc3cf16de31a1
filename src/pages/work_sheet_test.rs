use super::*;

fn sheet(id: &str, date: &str) -> WorkSheet {
    WorkSheet {
        id: id.to_owned(),
        task: "Sales".to_owned(),
        hours_worked: 4.0,
        date: date.to_owned(),
        employee_email: None,
    }
}

#[test]
fn parse_input_accepts_valid_fields() {
    let input = parse_work_sheet_input("Sales", "6.5", "2025-07-01").unwrap();
    assert_eq!(input.task, "Sales");
    assert_eq!(input.hours_worked, 6.5);
    assert_eq!(input.date, "2025-07-01");
}

#[test]
fn parse_input_requires_task_selection() {
    assert_eq!(parse_work_sheet_input("", "4", "2025-07-01"), Err("Select a task."));
}

#[test]
fn parse_input_rejects_non_numeric_hours() {
    assert_eq!(
        parse_work_sheet_input("Sales", "lots", "2025-07-01"),
        Err("Hours must be a number.")
    );
}

#[test]
fn parse_input_rejects_zero_and_negative_hours() {
    assert_eq!(
        parse_work_sheet_input("Sales", "0", "2025-07-01"),
        Err("Hours must be greater than zero.")
    );
    assert_eq!(
        parse_work_sheet_input("Sales", "-2", "2025-07-01"),
        Err("Hours must be greater than zero.")
    );
}

#[test]
fn parse_input_requires_date() {
    assert_eq!(parse_work_sheet_input("Sales", "4", ""), Err("Pick a date."));
}

#[test]
fn entries_sort_newest_first() {
    let sorted = sort_newest_first(vec![
        sheet("a", "2025-06-01"),
        sheet("b", "2025-07-15"),
        sheet("c", "2025-07-01"),
    ]);
    let ids: Vec<_> = sorted.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}
