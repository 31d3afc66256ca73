//! This module defines the closed set of type tags the engine can discover,
//! and the promotion lattice that folds per-field verdicts into a verdict
//! for a whole sequence of fields.

use std::fmt::Display;
use std::str::FromStr;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// The type tags a field or a column can resolve to.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord
)]
pub enum FieldType {
  /// No evidence yet. Only valid as the initial value of a running
  /// aggregate; field resolution never returns this.
  Unknown,
  /// A boolean literal: `true` or `false`, any letter case.
  Bool,
  /// An integer: digits with optional sign.
  Int,
  /// A floating-point number, including the `nan` literal.
  Float,
  /// A complex number, with an imaginary marker and/or parentheses.
  Complex,
  /// Arbitrary text; also the verdict for anything malformed.
  String,
  /// A field with no characters at all.
  Empty,
}

impl FieldType {
  /// Returns all type tags.
  pub const fn all() -> &'static [Self] {
    return &[
      Self::Unknown,
      Self::Bool,
      Self::Int,
      Self::Float,
      Self::Complex,
      Self::String,
      Self::Empty,
    ];
  }

  /// Returns the all-caps name of the tag.
  pub const fn name(&self) -> &'static str {
    return match self {
      Self::Unknown => "UNKNOWN",
      Self::Bool => "BOOL",
      Self::Int => "INT",
      Self::Float => "FLOAT",
      Self::Complex => "COMPLEX",
      Self::String => "STRING",
      Self::Empty => "EMPTY",
    };
  }

  /// Returns the small, snake case name of the tag.
  pub fn snake_case_name(&self) -> String {
    return self.name().to_case(Case::Snake);
  }
}

impl Display for FieldType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.name());
  }
}

impl FromStr for FieldType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let upper = s.trim().to_ascii_uppercase();
    return Self::all()
      .iter()
      .find(|t| t.name() == upper)
      .copied()
      .ok_or_else(|| format!("unknown type tag \"{}\"", s));
  }
}

/// Folds a new field verdict into a running aggregate. This is the join of
/// the promotion lattice: `Unknown` contributes nothing, `String` absorbs
/// everything, `Bool` only survives with more `Bool`, `Empty` never lowers
/// a numeric verdict, and the numeric tags widen `Int` to `Float` to
/// `Complex`. The operation is commutative and associative, so callers can
/// fold a sequence of field tags in any grouping.
pub fn promote(previous: FieldType, new: FieldType) -> FieldType {
  use FieldType::*;
  return match (previous, new) {
    (Unknown, n) => n,
    (p, Unknown) => p,
    // a string with anything else is a string
    (String, _) | (_, String) => String,
    // bool found with anything else is a string
    (Bool, Bool) => Bool,
    (Bool, _) | (_, Bool) => String,
    // empty is absorbed
    (Empty, n) => n,
    (p, Empty) => p,
    (Int, Int) => Int,
    (Int, Float) | (Float, Int | Float) => Float,
    (Complex, _) | (_, Complex) => Complex,
  };
}
