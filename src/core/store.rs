use crate::core::calculator::drr;
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::models::row::Row;

/// Ordered sequence of editable rows. Always holds at least one row.
///
/// Every mutation recomputes the derived fields of the touched row(s)
/// before returning; there is no other recomputation trigger.
#[derive(Debug)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self {
            rows: vec![Row::new(1)],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, pos: usize) -> AppResult<&Row> {
        self.rows.get(pos).ok_or(AppError::RowIndex(pos))
    }

    fn get_mut(&mut self, pos: usize) -> AppResult<&mut Row> {
        self.rows.get_mut(pos).ok_or(AppError::RowIndex(pos))
    }

    /// Set one scalar field. The value is taken as-is: dates keep the raw
    /// text (the calculator decides whether it parses), lead counts go
    /// through numeric coercion, so a cleared or garbled entry lands at 0.
    pub fn update_field(&mut self, pos: usize, field: Field, value: &str) -> AppResult<()> {
        let row = self.get_mut(pos)?;

        match field {
            Field::StartDate => row.start_date = value.to_string(),
            Field::EndDate => row.end_date = value.to_string(),
            Field::Leads => row.leads = value.trim().parse().unwrap_or(0.0),
        }

        drr::apply(row);
        Ok(())
    }

    /// Write one excluded-date slot. Keeps the invariant that the sequence
    /// ends with an open (empty) slot: filling the trailing slot appends a
    /// fresh one.
    pub fn update_excluded_date(&mut self, pos: usize, slot: usize, value: &str) -> AppResult<()> {
        let row = self.get_mut(pos)?;

        let entry = row
            .excluded_dates
            .get_mut(slot)
            .ok_or(AppError::ExcludedSlot(slot))?;
        *entry = value.to_string();

        if row.excluded_dates.last().is_some_and(|d| !d.is_empty()) {
            row.excluded_dates.push(String::new());
        }

        drr::apply(row);
        Ok(())
    }

    /// Insert `row` immediately before `pos`.
    pub fn insert_row_above(&mut self, pos: usize, row: Row) -> AppResult<()> {
        if pos > self.rows.len() {
            return Err(AppError::RowIndex(pos));
        }
        self.rows.insert(pos, row);
        self.recalculate_all();
        Ok(())
    }

    /// Delete the row at `pos`. Rejected while it is the only one.
    pub fn remove_row(&mut self, pos: usize) -> AppResult<()> {
        if self.rows.len() == 1 {
            return Err(AppError::LastRow);
        }
        if pos >= self.rows.len() {
            return Err(AppError::RowIndex(pos));
        }
        self.rows.remove(pos);
        self.recalculate_all();
        Ok(())
    }

    /// Stamp the row's last-update field (first step of the save flow).
    pub fn stamp_row(&mut self, pos: usize, stamp: &str) -> AppResult<&Row> {
        let row = self.get_mut(pos)?;
        row.last_update = stamp.to_string();
        Ok(&*row)
    }

    /// Re-derive every row; used after structural changes to the sequence.
    pub fn recalculate_all(&mut self) {
        for row in &mut self.rows {
            drr::apply(row);
        }
    }
}
