//! This module implements the character-class predicates the scanner
//! dispatches on. They define the scanner's whole vocabulary: digits,
//! whitespace, the numeric punctuation, and the case-insensitive letters
//! needed to spell `true`, `false` and `nan`. ASCII only, no locale
//! awareness, no state.

/// Checks if a character is an ASCII digit.
pub(crate) fn is_digit(c: char) -> bool {
  return c.is_ascii_digit();
}

/// Checks if a character is an ASCII space or control whitespace.
pub(crate) fn is_space(c: char) -> bool {
  return matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r');
}

/// Checks if a character is a plus or minus sign.
pub(crate) fn is_sign(c: char) -> bool {
  return c == '+' || c == '-';
}

/// Checks if a character is a decimal point.
pub(crate) fn is_decimal(c: char) -> bool {
  return c == '.';
}

/// Checks if a character is an opening parenthesis.
pub(crate) fn is_paren_open(c: char) -> bool {
  return c == '(';
}

/// Checks if a character is a closing parenthesis.
pub(crate) fn is_paren_close(c: char) -> bool {
  return c == ')';
}

/// Checks for `a`/`A` (second letter of `false` and `nan`).
pub(crate) fn is_a(c: char) -> bool {
  return c == 'a' || c == 'A';
}

/// Checks for `e`/`E` (exponent marker, last letter of `true`/`false`).
pub(crate) fn is_e(c: char) -> bool {
  return c == 'e' || c == 'E';
}

/// Checks for `f`/`F`.
pub(crate) fn is_f(c: char) -> bool {
  return c == 'f' || c == 'F';
}

/// Checks for `j`/`J` (imaginary marker).
pub(crate) fn is_j(c: char) -> bool {
  return c == 'j' || c == 'J';
}

/// Checks for `l`/`L`.
pub(crate) fn is_l(c: char) -> bool {
  return c == 'l' || c == 'L';
}

/// Checks for `n`/`N`.
pub(crate) fn is_n(c: char) -> bool {
  return c == 'n' || c == 'N';
}

/// Checks for `r`/`R`.
pub(crate) fn is_r(c: char) -> bool {
  return c == 'r' || c == 'R';
}

/// Checks for `s`/`S`.
pub(crate) fn is_s(c: char) -> bool {
  return c == 's' || c == 'S';
}

/// Checks for `t`/`T`.
pub(crate) fn is_t(c: char) -> bool {
  return c == 't' || c == 'T';
}

/// Checks for `u`/`U`.
pub(crate) fn is_u(c: char) -> bool {
  return c == 'u' || c == 'U';
}
