/// Numeric conversion and formatting helpers.
///
/// This module converts operands to the text used by the infix description
/// and parses keyed-in entries back into numbers. Conversions never panic:
/// values that cannot be represented are reported as `None` or written out in
/// full.
pub mod num;
