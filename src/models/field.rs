/// Editable scalar fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StartDate,
    EndDate,
    Leads,
}

impl Field {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" | "startdate" => Some(Self::StartDate),
            "end" | "enddate" => Some(Self::EndDate),
            "leads" => Some(Self::Leads),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StartDate => "start",
            Field::EndDate => "end",
            Field::Leads => "leads",
        }
    }
}
