//! Month, currency, and date display helpers shared by payroll views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Month names in payroll order, as the backend stores them.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 1-based month number for a stored month name; unknown names sort first.
#[allow(clippy::cast_possible_truncation)]
pub fn month_number(name: &str) -> u32 {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map_or(1, |index| index as u32 + 1)
}

/// 0-based month index from an ISO `YYYY-MM-DD` date string.
pub fn month_index_from_iso(date: &str) -> Option<u32> {
    let month: u32 = date.split('-').nth(1)?.parse().ok()?;
    (1..=12).contains(&month).then_some(month - 1)
}

/// Dollar amount with thousands separators, e.g. `$75,000.00`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
