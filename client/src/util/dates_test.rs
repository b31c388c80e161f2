use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn iso_pads_month_and_day() {
    assert_eq!(iso(date(2025, 3, 7)), "2025-03-07");
}

#[test]
fn next_day_rolls_over_month_and_year() {
    assert_eq!(next_day(date(2025, 1, 31)), date(2025, 2, 1));
    assert_eq!(next_day(date(2024, 12, 31)), date(2025, 1, 1));
    assert_eq!(next_day(date(2024, 2, 28)), date(2024, 2, 29));
}

#[test]
fn today_iso_is_well_formed() {
    let today = today_iso();
    assert!(is_iso_date(&today), "{today}");
    assert_eq!(tomorrow_iso(), iso(next_day(super::today())));
}

#[test]
fn is_iso_date_rejects_other_shapes() {
    assert!(is_iso_date("2025-10-17"));
    assert!(!is_iso_date("2025-10-7"));
    assert!(!is_iso_date("17.10.2025"));
    assert!(!is_iso_date("2025-02-30"));
    assert!(!is_iso_date(""));
}
