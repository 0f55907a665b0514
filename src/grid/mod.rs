//! # Grid View
//!
//! Client-side sorting and filtering of a book snapshot, the way the inventory grid
//! offers it on every data column. A query never touches the snapshot itself; it returns
//! references into it in display order.
//!
//! - **Filter**: case-insensitive "contains" on one column. All filters must match.
//! - **Sort**: one column, ascending or descending, stable. `year` and `price` compare as
//!   numbers when both sides parse (numbers first), everything else compares as
//!   case-insensitive text.

use crate::framework::{Row, RowCollection};
use crate::model::{Book, Column};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

/// Keeps rows whose `column` contains `needle`, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: Column,
    needle: String,
}

impl ColumnFilter {
    pub fn new(column: Column, needle: impl AsRef<str>) -> Self {
        Self {
            column,
            needle: needle.as_ref().to_lowercase(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.needle.is_empty() || book.field(self.column).to_lowercase().contains(&self.needle)
    }
}

/// A sort plus any number of filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridQuery {
    pub sort: Option<SortKey>,
    pub filters: Vec<ColumnFilter>,
}

impl GridQuery {
    pub fn apply<'a>(&self, rows: &'a RowCollection<Book>) -> Vec<&'a Row<Book>> {
        let mut visible: Vec<&Row<Book>> = rows
            .iter()
            .filter(|row| self.filters.iter().all(|f| f.matches(&row.record)))
            .collect();

        if let Some(key) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = compare_cells(key.column, &a.record, &b.record);
                match key.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        visible
    }
}

fn compare_cells(column: Column, a: &Book, b: &Book) -> Ordering {
    let (a, b) = (a.field(column), b.field(column));
    if column.is_numeric() {
        match (parse_number(a), parse_number(b)) {
            (Some(x), Some(y)) => return x.total_cmp(&y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
