//! Data models module
//!
//! Contains the multiplication table types shown in Learn mode.

pub mod table;

pub use table::{Table, TableRow, MAX_TABLE, MIN_TABLE, ROWS_PER_TABLE};
