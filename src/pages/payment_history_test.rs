use super::*;

fn payment(id: &str, month: &str, year: i32, amount: f64) -> Payment {
    Payment {
        id: id.to_owned(),
        month: month.to_owned(),
        year,
        amount,
        transaction_id: None,
    }
}

#[test]
fn payments_sort_earliest_first() {
    let sorted = sort_chronological(vec![
        payment("a", "March", 2025, 100.0),
        payment("b", "December", 2024, 100.0),
        payment("c", "January", 2025, 100.0),
    ]);
    let ids: Vec<_> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn total_paid_sums_amounts() {
    let payments = vec![
        payment("a", "January", 2025, 1500.5),
        payment("b", "February", 2025, 1499.5),
    ];
    assert_eq!(total_paid(&payments), 3000.0);
}

#[test]
fn total_paid_of_empty_history_is_zero() {
    assert_eq!(total_paid(&[]), 0.0);
}
