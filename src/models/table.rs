//! Multiplication tables shown in Learn mode

use std::fmt;

/// Smallest table offered by the application
pub const MIN_TABLE: u32 = 2;
/// Largest table offered by the application
pub const MAX_TABLE: u32 = 9;
/// Number of rows in each table (multipliers 1 through 10)
pub const ROWS_PER_TABLE: u32 = 10;

/// A multiplication table, always within [`MIN_TABLE`]..=[`MAX_TABLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Table(u32);

impl Table {
    /// Create a table, returning `None` when `value` is outside the supported range
    pub fn new(value: u32) -> Option<Self> {
        (MIN_TABLE..=MAX_TABLE).contains(&value).then_some(Self(value))
    }

    /// All supported tables in ascending order
    pub fn all() -> impl Iterator<Item = Table> {
        (MIN_TABLE..=MAX_TABLE).map(Table)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The ten rows of this table in ascending multiplier order
    pub fn rows(&self) -> impl Iterator<Item = TableRow> {
        let table = self.0;
        (1..=ROWS_PER_TABLE).map(move |multiplier| TableRow {
            table,
            multiplier,
            product: table * multiplier,
        })
    }

    /// Label used for this table in the Learn list
    pub fn label(&self) -> String {
        format!("Table of {}", self.0)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a multiplication table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub table: u32,
    pub multiplier: u32,
    pub product: u32,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.table, self.multiplier, self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_range() {
        assert!(Table::new(1).is_none());
        assert!(Table::new(10).is_none());
        assert_eq!(Table::new(2).map(|t| t.value()), Some(2));
        assert_eq!(Table::new(9).map(|t| t.value()), Some(9));
    }

    #[test]
    fn test_all_tables_ascending() {
        let values: Vec<u32> = Table::all().map(|t| t.value()).collect();
        assert_eq!(values, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_rows_of_five() {
        let table = Table::new(5).unwrap();
        let rows: Vec<(u32, u32, u32)> = table
            .rows()
            .map(|r| (r.table, r.multiplier, r.product))
            .collect();
        let expected: Vec<(u32, u32, u32)> = (1..=10).map(|i| (5, i, 5 * i)).collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_row_display() {
        let row = Table::new(7).unwrap().rows().nth(2).unwrap();
        assert_eq!(row.to_string(), "7 × 3 = 21");
        assert_eq!(Table::new(7).unwrap().label(), "Table of 7");
    }
}
