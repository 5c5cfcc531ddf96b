pub mod field;
pub mod row;
pub mod snapshot;
