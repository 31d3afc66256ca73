//! This module implements the single-pass field scanner, the end-of-field
//! resolver, and the drivers that feed whole fields and sequences of fields
//! through them.
//!
//! The scanner estimates the type of a field from character-class counts.
//! Some ordering considerations are ignored on purpose -- if downstream
//! value parsing fails, the fallback is a string type anyway.

use serde::{Deserialize, Serialize};

use crate::chars::*;
use crate::types::{promote, FieldType};

/// What the scanner tells the driver after each character.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanControl {
  /// Keep feeding characters.
  Continue,
  /// The field is decided; further characters only need to be counted.
  Stop,
}

/// The scanner's working memory for one field, plus the running aggregate
/// over every field it has seen since creation.
///
/// One instance is meant to be reused across the fields of a column:
/// [FieldState::process] resets the per-field portion, while the line
/// aggregate survives until the instance is dropped. All state is bounded
/// and inline; nothing allocates.
#[derive(Clone, Debug)]
pub struct FieldState {
  /// The running aggregate over all fields seen so far.
  resolved_line: FieldType,
  /// Early field verdict; once set, further characters are ignored.
  resolved_field: FieldType,
  /// Still inside the leading-whitespace run.
  previous_leading_space: bool,
  /// The previous non-leading-space character was numeric-class.
  previous_numeric: bool,
  /// Every non-space character so far formed an unbroken numeric run
  /// starting at the first non-whitespace position.
  contiguous_numeric: bool,
  /// Number of leading whitespace characters consumed.
  count_leading_space: usize,
  /// Signed token counter: reaches +4 for a complete `true`, -5 for a
  /// complete `false`.
  count_bool: i32,
  /// Count of `+`/`-`. A parenthesised complex with two exponents can have
  /// up to four.
  count_sign: usize,
  /// Count of `e`/`E`.
  count_e: usize,
  /// Count of `j`/`J`.
  count_j: usize,
  /// Count of `.`.
  count_decimal: usize,
  /// Count of characters contributing to a `nan` token, position-wise.
  count_nan: usize,
  /// Count of `(`.
  count_paren_open: usize,
  /// Count of `)`.
  count_paren_close: usize,
  /// Count of digits.
  count_digit: usize,
  /// Count of non-space characters.
  count_notspace: usize,
}

impl Default for FieldState {
  fn default() -> Self {
    return Self::new();
  }
}

impl FieldState {
  /// Instantiates a scanner with an undetermined line aggregate.
  pub fn new() -> Self {
    return Self {
      resolved_line: FieldType::Unknown,
      resolved_field: FieldType::Unknown,
      previous_leading_space: false,
      previous_numeric: false,
      contiguous_numeric: false,
      count_leading_space: 0,
      count_bool: 0,
      count_sign: 0,
      count_e: 0,
      count_j: 0,
      count_decimal: 0,
      count_nan: 0,
      count_paren_open: 0,
      count_paren_close: 0,
      count_digit: 0,
      count_notspace: 0,
    };
  }

  /// Clears the per-field counters and flags, readying the scanner for the
  /// next field. The line aggregate survives.
  pub fn reset(&mut self) {
    self.resolved_field = FieldType::Unknown;
    self.previous_leading_space = false;
    self.previous_numeric = false;
    self.contiguous_numeric = false;
    self.count_leading_space = 0;
    self.count_bool = 0;
    self.count_sign = 0;
    self.count_e = 0;
    self.count_j = 0;
    self.count_decimal = 0;
    self.count_nan = 0;
    self.count_paren_open = 0;
    self.count_paren_close = 0;
    self.count_digit = 0;
    self.count_notspace = 0;
  }

  /// The running aggregate over every field seen since creation.
  pub fn line_type(&self) -> FieldType {
    return self.resolved_line;
  }

  /// Settles the field early on a string verdict and halts the scan.
  fn resolve_string(&mut self) -> ScanControl {
    self.resolved_field = FieldType::String;
    return ScanControl::Stop;
  }

  /// Feeds one character to the scanner. `pos` is the zero-based index of
  /// `c` within the raw, untrimmed field; the driver owns the traversal and
  /// supplies it. Returns [ScanControl::Stop] once the field is decided --
  /// a resolved field stays stopped for every subsequent character.
  pub fn process_char(&mut self, c: char, pos: usize) -> ScanControl {
    if self.resolved_field != FieldType::Unknown {
      return ScanControl::Stop;
    }

    // evaluate space
    let mut space = false;
    if is_space(c) {
      if pos == 0 {
        self.previous_leading_space = true;
      }
      if self.previous_leading_space {
        self.count_leading_space += 1;
        return ScanControl::Continue;
      }
      space = true;
    } else {
      self.count_notspace += 1;
    }
    // this char is not space (or no longer leading)
    self.previous_leading_space = false;
    // all position-sensitive rules work on the trimmed position
    let pos_field = pos - self.count_leading_space;

    // evaluate numeric, non-positional
    let mut numeric = false;
    let mut digit = false;
    if space {
      // no numeric nor token update for interior whitespace
    } else if is_digit(c) {
      numeric = true;
      digit = true;
      self.count_digit += 1;
    } else if is_sign(c) {
      self.count_sign += 1;
      if self.count_sign > 4 {
        // complex numbers with exponents can have up to 4 signs
        return self.resolve_string();
      }
      numeric = true;
    } else if is_paren_open(c) {
      numeric = true;
      self.count_paren_open += 1;
      // open paren only permitted at trimmed position 0, and only once
      if pos_field != 0 || self.count_paren_open > 1 {
        return self.resolve_string();
      }
    } else if is_paren_close(c) {
      numeric = true;
      self.count_paren_close += 1;
      // not checking that this sits at the end of the numeric run
      if self.count_paren_close > 1 {
        return self.resolve_string();
      }
    } else if is_e(c) {
      // the one character that is both numeric and a bool letter
      numeric = true;
      self.count_e += 1;
      if pos_field == 0 || self.count_e > 2 {
        // true and false each have one E, complex can have two
        return self.resolve_string();
      }
    } else if is_j(c) {
      numeric = true;
      self.count_j += 1;
      if pos_field == 0 || self.count_j > 1 {
        return self.resolve_string();
      }
    } else if is_decimal(c) {
      numeric = true;
      self.count_decimal += 1;
      // complex can have two
      if self.count_decimal > 2 {
        return self.resolve_string();
      }
    }

    // track contiguity of the numeric run
    if numeric {
      if pos_field == 0 {
        self.contiguous_numeric = true;
        self.previous_numeric = true;
        return ScanControl::Continue;
      }
      if !self.previous_numeric {
        // a numeric char past position 0 whose predecessor was not numeric
        self.contiguous_numeric = false;
      }
      self.previous_numeric = true;
      // an exponent letter still needs token accounting below
      if self.contiguous_numeric || !is_e(c) {
        return ScanControl::Continue;
      }
    } else {
      if self.contiguous_numeric && !space {
        // non-numeric, non-space char right after a contiguous numeric run
        return self.resolve_string();
      }
      self.previous_numeric = false;
    }

    // evaluate character positions for the true/false/nan tokens
    if space || digit {
      return ScanControl::Continue;
    }
    match pos_field {
      0 => {
        if is_t(c) {
          self.count_bool += 1;
        } else if is_f(c) {
          self.count_bool -= 1;
        } else if is_n(c) {
          self.count_nan += 1;
        }
      }
      1 => {
        if is_r(c) {
          self.count_bool += 1;
        } else if is_a(c) {
          self.count_bool -= 1;
          self.count_nan += 1;
        }
      }
      2 => {
        if is_u(c) {
          self.count_bool += 1;
        } else if is_l(c) {
          self.count_bool -= 1;
        } else if is_n(c) {
          self.count_nan += 1;
        }
      }
      3 => {
        if is_e(c) {
          self.count_bool += 1;
        }
        if is_s(c) {
          self.count_bool -= 1;
        }
      }
      4 => {
        if is_e(c) && self.count_bool == -4 {
          self.count_bool -= 1;
        }
      }
      _ => (),
    };
    return ScanControl::Continue;
  }

  /// Chooses the field-level type once all characters have been fed. Since
  /// the scan may halt early, the caller passes the total raw character
  /// count of the field.
  pub fn resolve_field(&self, count: usize) -> FieldType {
    if count == 0 {
      return FieldType::Empty;
    }
    if self.resolved_field != FieldType::Unknown {
      return self.resolved_field;
    }
    if self.count_bool == 4 && self.count_notspace == 4 {
      return FieldType::Bool;
    }
    if self.count_bool == -5 && self.count_notspace == 5 {
      return FieldType::Bool;
    }
    if self.count_nan == 3 && self.count_notspace == 3 {
      return FieldType::Float;
    }
    if self.contiguous_numeric {
      // excessive counts were already turned into early string verdicts
      if self.count_digit == 0 {
        // contiguous runs like "+.-" have no digits at all
        return FieldType::String;
      }
      if self.count_j == 0
        && self.count_e == 0
        && self.count_decimal == 0
        && self.count_paren_open == 0
        && self.count_paren_close == 0
      {
        return FieldType::Int;
      }
      if self.count_j == 0
        && self.count_paren_open == 0
        && self.count_paren_close == 0
        && (self.count_decimal == 1 || self.count_e == 1)
      {
        return FieldType::Float;
      }
      let parens_paired = self.count_paren_open == 1 && self.count_paren_close == 1;
      let parens_absent = self.count_paren_open == 0 && self.count_paren_close == 0;
      if self.count_j == 1 && (parens_paired || parens_absent) {
        return FieldType::Complex;
      }
      // only parens and digits also reads as complex
      if self.count_j == 0 && parens_paired {
        return FieldType::Complex;
      }
    }
    return FieldType::String;
  }

  /// Runs a whole field through the scanner: resets the per-field state,
  /// feeds every character, resolves the field, and folds the verdict into
  /// the line aggregate, which it returns.
  pub fn process(&mut self, field: &str) -> FieldType {
    self.reset();
    let mut count = 0;
    let mut control = ScanControl::Continue;
    for c in field.chars() {
      if control == ScanControl::Continue {
        control = self.process_char(c, count);
      }
      // keep counting past a stop so the resolver sees the true length
      count += 1;
    }
    let verdict = self.resolve_field(count);
    self.resolved_line = promote(self.resolved_line, verdict);
    return self.resolved_line;
  }

  /// Runs a sequence of fields through the scanner and returns the line
  /// aggregate.
  pub fn process_line<'a, I>(&mut self, fields: I) -> FieldType
  where
    I: IntoIterator<Item = &'a str>,
  {
    for field in fields {
      self.process(field);
    }
    return self.resolved_line;
  }
}
