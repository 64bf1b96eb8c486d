use super::*;

#[test]
fn iso_date_takes_calendar_part() {
    assert_eq!(iso_date("2026-10-16T08:30:00.000Z"), "2026-10-16");
}

#[test]
fn iso_date_without_time_is_unchanged() {
    assert_eq!(iso_date("2026-10-16"), "2026-10-16");
}

#[test]
fn empty_input_gets_today_as_min() {
    assert_eq!(min_for("", "2026-10-16"), Some("2026-10-16"));
}

#[test]
fn prefilled_input_keeps_its_range() {
    assert_eq!(min_for("2025-01-31", "2026-10-16"), None);
}

#[test]
fn today_has_date_shape() {
    let today = iso_date("1999-12-31T23:59:59.999Z");
    let parts = today.split('-').map(str::len).collect::<Vec<_>>();
    assert_eq!(parts, vec![4, 2, 2]);
}
