use serde::Serialize;

/// One editable period record: raw inputs plus the derived DRR fields.
///
/// Dates stay raw entry strings (empty until set); the calculator parses
/// them on demand and leaves the derived fields untouched when they do not
/// parse. `index` is a display ordinal only, never a uniqueness key.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub index: u32,
    pub start_date: String,
    pub end_date: String,
    pub excluded_dates: Vec<String>,
    pub leads: f64,
    pub drr: String,
    pub month_year: String,
    pub number_of_days: i64,
    pub last_update: String,
}

impl Row {
    /// Fresh row with the given display ordinal. Starts with the single
    /// open excluded-date slot.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            start_date: String::new(),
            end_date: String::new(),
            excluded_dates: vec![String::new()],
            leads: 0.0,
            drr: "0".to_string(),
            month_year: String::new(),
            number_of_days: 0,
            last_update: String::new(),
        }
    }

    /// Continuation row seeded by a save: next ordinal, everything else
    /// back at defaults.
    pub fn continuation_of(saved: &Row) -> Self {
        Self::new(saved.index + 1)
    }

    /// Excluded dates actually set (open placeholders skipped).
    pub fn excluded_set(&self) -> impl Iterator<Item = &String> {
        self.excluded_dates.iter().filter(|d| !d.is_empty())
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded_set().count()
    }
}
