use super::*;

fn salary(month: &str, amount: f64) -> SalaryPayment {
    SalaryPayment {
        month: month.to_owned(),
        year: 2025,
        amount,
    }
}

#[test]
fn max_amount_finds_largest_payment() {
    let history = vec![salary("January", 1000.0), salary("February", 2500.0), salary("March", 1800.0)];
    assert_eq!(max_amount(&history), 2500.0);
}

#[test]
fn max_amount_of_empty_history_is_zero() {
    assert_eq!(max_amount(&[]), 0.0);
}

#[test]
fn bar_percent_scales_against_max() {
    assert_eq!(bar_percent(50.0, 100.0), 50.0);
    assert_eq!(bar_percent(100.0, 100.0), 100.0);
}

#[test]
fn bar_percent_handles_zero_max() {
    assert_eq!(bar_percent(10.0, 0.0), 0.0);
}

#[test]
fn parse_new_salary_accepts_positive_numbers() {
    assert_eq!(parse_new_salary(" 80000 "), Ok(80000.0));
}

#[test]
fn parse_new_salary_rejects_garbage_and_non_positive() {
    assert_eq!(parse_new_salary("lots"), Err("Enter a valid salary."));
    assert_eq!(parse_new_salary("0"), Err("Enter a valid salary."));
    assert_eq!(parse_new_salary("-5"), Err("Enter a valid salary."));
}
