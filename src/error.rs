/// Parsing errors.
///
/// Defines all error types that can occur while lexing a script or reading
/// variable presets from the command line. Evaluation itself never fails
/// with an error: a program that cannot be evaluated simply has no result.
pub mod parse_error;

pub use parse_error::ParseError;
