/// The engine itself and its configuration.
///
/// Holds the program stack, pushes operands, variables and operators onto
/// it, and owns the operator and variable tables.
pub mod core;

/// Infix rendering of the program.
///
/// Walks the program backwards exactly like evaluation does, producing text
/// instead of numbers.
pub mod describe;

/// Numeric evaluation of the program.
///
/// Interprets the program as a stack machine, starting from the most recently
/// pushed token.
pub mod evaluate;

/// Operator and variable tables.
pub mod registry;

/// The tokens that make up a program.
pub mod token;
