use drrcalc::core::calculator::drr::{apply, derive};
use drrcalc::models::row::Row;

fn row_with(start: &str, end: &str, leads: f64) -> Row {
    let mut row = Row::new(1);
    row.start_date = start.to_string();
    row.end_date = end.to_string();
    row.leads = leads;
    row
}

#[test]
fn ten_day_period_without_exclusions() {
    let mut row = row_with("2024-01-01", "2024-01-11", 20.0);
    apply(&mut row);

    assert_eq!(row.number_of_days, 10);
    assert_eq!(row.drr, "2.00");
    assert_eq!(row.month_year, "Month: January 2024");
}

#[test]
fn excluded_date_shortens_the_period() {
    let mut row = row_with("2024-01-01", "2024-01-11", 20.0);
    row.excluded_dates = vec!["2024-01-05".to_string(), String::new()];
    apply(&mut row);

    assert_eq!(row.number_of_days, 9);
    assert_eq!(row.drr, "2.22");
}

#[test]
fn reversed_range_never_derives() {
    let row = row_with("2024-02-01", "2024-01-01", 20.0);
    assert!(derive(&row).is_none());
}

#[test]
fn reversed_range_keeps_defaults_when_never_valid() {
    let mut row = row_with("2024-02-01", "2024-01-01", 20.0);
    apply(&mut row);

    assert_eq!(row.drr, "0");
    assert_eq!(row.month_year, "");
    assert_eq!(row.number_of_days, 0);
}

#[test]
fn reversed_range_keeps_stale_values_from_a_valid_edit() {
    let mut row = row_with("2024-01-01", "2024-01-11", 20.0);
    apply(&mut row);

    row.end_date = "2023-12-01".to_string();
    apply(&mut row);

    // stale, but untouched
    assert_eq!(row.drr, "2.00");
    assert_eq!(row.number_of_days, 10);
    assert_eq!(row.month_year, "Month: January 2024");
}

#[test]
fn unparsable_date_is_a_silent_no_op() {
    let mut row = row_with("not-a-date", "2024-01-11", 20.0);
    assert!(derive(&row).is_none());

    apply(&mut row);
    assert_eq!(row.drr, "0");
}

#[test]
fn recomputation_is_idempotent() {
    let mut row = row_with("2024-03-01", "2024-03-31", 90.0);
    row.excluded_dates = vec!["2024-03-10".to_string(), String::new()];
    apply(&mut row);

    let first = (row.drr.clone(), row.month_year.clone(), row.number_of_days);
    apply(&mut row);

    assert_eq!(
        first,
        (row.drr.clone(), row.month_year.clone(), row.number_of_days)
    );
}

#[test]
fn same_day_range_divides_by_zero() {
    // 0 raw days, no exclusions: the division runs unguarded
    let mut row = row_with("2024-01-01", "2024-01-01", 5.0);
    apply(&mut row);

    assert_eq!(row.number_of_days, 0);
    assert_eq!(row.drr, "inf");
}

#[test]
fn zero_leads_over_zero_days_is_nan() {
    let mut row = row_with("2024-01-01", "2024-01-01", 0.0);
    apply(&mut row);

    assert_eq!(row.drr, "NaN");
}

#[test]
fn exclusions_beyond_the_period_go_negative() {
    let mut row = row_with("2024-01-01", "2024-01-03", 10.0);
    row.excluded_dates = vec![
        "2024-01-01".to_string(),
        "2024-01-02".to_string(),
        "2024-01-03".to_string(),
        String::new(),
    ];
    apply(&mut row);

    assert_eq!(row.number_of_days, -1);
    assert_eq!(row.drr, "-10.00");
}
