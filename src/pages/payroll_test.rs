use super::*;

fn request(id: &str, status: PayrollStatus) -> PayrollRequest {
    PayrollRequest {
        id: id.to_owned(),
        employee_name: "John".to_owned(),
        employee_email: "john@example.com".to_owned(),
        salary: 75000.0,
        month: "January".to_owned(),
        year: 2025,
        status,
        request_date: None,
        payment_date: None,
    }
}

#[test]
fn split_separates_pending_from_completed() {
    let (pending, completed) = split_by_status(vec![
        request("a", PayrollStatus::Pending),
        request("b", PayrollStatus::Completed),
        request("c", PayrollStatus::Pending),
    ]);
    let pending_ids: Vec<_> = pending.iter().map(|r| r.id.as_str()).collect();
    let completed_ids: Vec<_> = completed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(pending_ids, vec!["a", "c"]);
    assert_eq!(completed_ids, vec!["b"]);
}

#[test]
fn split_of_empty_list_is_empty() {
    let (pending, completed) = split_by_status(Vec::new());
    assert!(pending.is_empty());
    assert!(completed.is_empty());
}
