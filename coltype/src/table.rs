//! This module implements the table driver: one scanner per column, fed
//! whole records at a time. It's the piece a delimited-text reader talks
//! to -- the reader splits lines into fields, this keeps the per-column
//! aggregates.

use itertools::{EitherOrBoth, Itertools};
use log::warn;

use crate::scanner::FieldState;
use crate::types::FieldType;

/// Discovers a type for every column of a stream of records.
///
/// Ragged input is tolerated: a record shorter than the table feeds the
/// missing columns an empty field, and a record wider than the table opens
/// new columns, back-filled with one empty field per record already
/// consumed. That way every column's aggregate always reflects the same
/// number of records.
#[derive(Clone, Debug)]
pub struct TableTypes {
  /// One scanner per column, in order of first appearance.
  columns: Vec<FieldState>,
  /// Number of records consumed so far.
  records: usize,
}

impl Default for TableTypes {
  fn default() -> Self {
    return Self::new();
  }
}

impl TableTypes {
  /// Instantiates a table with no columns.
  pub fn new() -> Self {
    return Self { columns: Vec::new(), records: 0 };
  }

  /// Returns the number of columns seen so far.
  pub fn width(&self) -> usize {
    return self.columns.len();
  }

  /// Returns the number of records consumed so far.
  pub fn records(&self) -> usize {
    return self.records;
  }

  /// Consumes one record, feeding each field to its column's scanner.
  pub fn consume_record<'a, I>(&mut self, fields: I)
  where
    I: IntoIterator<Item = &'a str>,
  {
    let mut ragged = false;
    let mut opened: Vec<FieldState> = Vec::new();
    for pair in self.columns.iter_mut().zip_longest(fields) {
      match pair {
        EitherOrBoth::Both(state, field) => {
          state.process(field);
        }
        EitherOrBoth::Left(state) => {
          // short record: this column gets an empty field
          state.process("");
          ragged = true;
        }
        EitherOrBoth::Right(field) => {
          // new column: back-fill the records it missed
          let mut state = FieldState::new();
          for _ in 0..self.records {
            state.process("");
          }
          state.process(field);
          opened.push(state);
          if self.records > 0 {
            ragged = true;
          }
        }
      }
    }
    self.columns.append(&mut opened);
    self.records += 1;
    if ragged {
      warn!("record {} did not match the table width", self.records);
    }
  }

  /// Returns the discovered type of every column, in order.
  pub fn types(&self) -> Vec<FieldType> {
    return self.columns.iter().map(FieldState::line_type).collect();
  }
}
