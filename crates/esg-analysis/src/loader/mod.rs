//! Input table loading: header normalization, synonym mapping, row
//! validation.

pub mod dates;
pub mod reader;
pub mod schema;

pub use dates::parse_date;
pub use reader::{LoadedRecords, RecordLoader};
pub use schema::{normalize_header, CanonicalColumn, ColumnMap};
