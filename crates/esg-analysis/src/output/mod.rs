//! Result table serialization.

pub mod writer;

pub use writer::{write_csv, write_json, write_table, BASE_COLUMNS, EXTENDED_COLUMNS};
