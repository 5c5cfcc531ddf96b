use drrcalc::core::session::Session;
use drrcalc::core::store::RowStore;
use drrcalc::errors::AppError;
use drrcalc::models::field::Field;
use drrcalc::models::row::Row;

const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[test]
fn store_starts_with_one_row() {
    let store = RowStore::new();

    assert_eq!(store.len(), 1);
    assert_eq!(store.rows()[0].index, 1);
    assert_eq!(store.rows()[0].excluded_dates, vec![String::new()]);
}

#[test]
fn update_field_recomputes_derived_fields() {
    let mut store = RowStore::new();
    store.update_field(0, Field::StartDate, "2024-01-01").unwrap();
    store.update_field(0, Field::EndDate, "2024-01-11").unwrap();
    store.update_field(0, Field::Leads, "20").unwrap();

    let row = &store.rows()[0];
    assert_eq!(row.number_of_days, 10);
    assert_eq!(row.drr, "2.00");
    assert_eq!(row.month_year, "Month: January 2024");
}

#[test]
fn update_field_rejects_missing_row() {
    let mut store = RowStore::new();
    let err = store.update_field(3, Field::Leads, "1").unwrap_err();
    assert!(matches!(err, AppError::RowIndex(3)));
}

#[test]
fn garbled_lead_input_coerces_to_zero() {
    let mut store = RowStore::new();
    store.update_field(0, Field::Leads, "20").unwrap();
    store.update_field(0, Field::Leads, "").unwrap();
    assert_eq!(store.rows()[0].leads, 0.0);

    store.update_field(0, Field::Leads, "twenty").unwrap();
    assert_eq!(store.rows()[0].leads, 0.0);
}

#[test]
fn filling_the_open_slot_appends_a_new_one() {
    let mut store = RowStore::new();
    store.update_excluded_date(0, 0, "2024-01-05").unwrap();

    assert_eq!(
        store.rows()[0].excluded_dates,
        vec!["2024-01-05".to_string(), String::new()]
    );
}

#[test]
fn clearing_a_slot_appends_nothing() {
    let mut store = RowStore::new();
    store.update_excluded_date(0, 0, "2024-01-05").unwrap();

    // trailing slot already open, so clearing slot 0 adds no new one
    store.update_excluded_date(0, 0, "").unwrap();
    assert_eq!(
        store.rows()[0].excluded_dates,
        vec![String::new(), String::new()]
    );
}

#[test]
fn writing_an_empty_value_into_the_open_slot_keeps_it_open() {
    let mut store = RowStore::new();
    store.update_excluded_date(0, 0, "").unwrap();
    assert_eq!(store.rows()[0].excluded_dates, vec![String::new()]);
}

#[test]
fn excluded_slot_out_of_range_is_rejected() {
    let mut store = RowStore::new();
    let err = store.update_excluded_date(0, 5, "2024-01-05").unwrap_err();
    assert!(matches!(err, AppError::ExcludedSlot(5)));
}

#[test]
fn removing_the_only_row_is_rejected() {
    let mut store = RowStore::new();
    let err = store.remove_row(0).unwrap_err();

    assert!(matches!(err, AppError::LastRow));
    assert_eq!(store.len(), 1);
}

#[test]
fn insert_row_above_orders_rows() {
    let mut store = RowStore::new();
    store.insert_row_above(0, Row::new(7)).unwrap();

    assert_eq!(store.rows()[0].index, 7);
    assert_eq!(store.rows()[1].index, 1);
}

#[test]
fn save_appends_snapshot_and_seeds_next_row() {
    let mut session = Session::new();
    session.store.update_field(0, Field::StartDate, "2024-01-01").unwrap();
    session.store.update_field(0, Field::EndDate, "2024-01-11").unwrap();
    session.store.update_field(0, Field::Leads, "20").unwrap();

    session.save(0, STAMP_FMT).unwrap();

    assert_eq!(session.saved.len(), 1);
    assert_eq!(session.store.len(), 2);

    // fresh continuation row sits above the saved one
    let next = &session.store.rows()[0];
    assert_eq!(next.index, 2);
    assert_eq!(next.drr, "0");
    assert_eq!(next.excluded_dates, vec![String::new()]);
    assert_eq!(next.last_update, "");

    let saved = &session.store.rows()[1];
    assert_eq!(saved.index, 1);
    assert!(!saved.last_update.is_empty());

    let snap = &session.saved.entries()[0];
    assert_eq!(snap.row.index, 1);
    assert_eq!(snap.row.drr, "2.00");
    assert_eq!(snap.row.last_update, saved.last_update);
}

#[test]
fn saving_an_incomplete_row_stores_it_as_is() {
    let mut session = Session::new();
    session.save(0, STAMP_FMT).unwrap();

    let snap = &session.saved.entries()[0];
    assert_eq!(snap.row.start_date, "");
    assert_eq!(snap.row.drr, "0");
    assert!(!snap.row.last_update.is_empty());
}

#[test]
fn snapshots_do_not_follow_later_edits() {
    let mut session = Session::new();
    session.store.update_field(0, Field::StartDate, "2024-01-01").unwrap();
    session.store.update_field(0, Field::EndDate, "2024-01-11").unwrap();
    session.store.update_field(0, Field::Leads, "20").unwrap();
    session.save(0, STAMP_FMT).unwrap();

    // the saved original now sits at position 1; keep editing it
    session.store.update_field(1, Field::Leads, "40").unwrap();

    assert_eq!(session.store.rows()[1].drr, "4.00");
    assert_eq!(session.saved.entries()[0].row.drr, "2.00");
}

#[test]
fn duplicate_indices_after_resaving_are_tolerated() {
    let mut session = Session::new();
    session.save(0, STAMP_FMT).unwrap(); // rows: [index 2, index 1]
    session.save(1, STAMP_FMT).unwrap(); // saving index 1 again seeds another index 2

    let indices: Vec<u32> = session.store.rows().iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![2, 2, 1]);
    assert_eq!(session.saved.len(), 2);
}

#[test]
fn remove_row_after_save_keeps_the_rest() {
    let mut session = Session::new();
    session.save(0, STAMP_FMT).unwrap();
    assert_eq!(session.store.len(), 2);

    session.store.remove_row(1).unwrap();

    assert_eq!(session.store.len(), 1);
    assert_eq!(session.store.rows()[0].index, 2);
    // snapshots are untouched by row removal
    assert_eq!(session.saved.len(), 1);
}
