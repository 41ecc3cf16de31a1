use super::*;

#[test]
fn month_number_maps_names_one_based() {
    assert_eq!(month_number("January"), 1);
    assert_eq!(month_number("December"), 12);
}

#[test]
fn month_number_is_case_insensitive() {
    assert_eq!(month_number("january"), 1);
}

#[test]
fn month_number_defaults_unknown_names_to_january() {
    assert_eq!(month_number("Smarch"), 1);
}

#[test]
fn month_index_from_iso_extracts_zero_based_month() {
    assert_eq!(month_index_from_iso("2025-07-14"), Some(6));
    assert_eq!(month_index_from_iso("2025-01-01"), Some(0));
}

#[test]
fn month_index_from_iso_rejects_garbage() {
    assert_eq!(month_index_from_iso("not-a-date"), None);
    assert_eq!(month_index_from_iso("2025-13-01"), None);
    assert_eq!(month_index_from_iso(""), None);
}

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(75000.0), "$75,000.00");
    assert_eq!(format_currency(1234567.5), "$1,234,567.50");
}

#[test]
fn format_currency_handles_small_and_negative_amounts() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(12.34), "$12.34");
    assert_eq!(format_currency(-950.5), "-$950.50");
}
