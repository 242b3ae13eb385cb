//! # rpnote
//!
//! rpnote is a reverse Polish notation calculator engine written in Rust.
//! It keeps every operand, variable and operator that was entered on a
//! program stack, evaluates that stack on demand, and renders it back as
//! readable infix text such as `3+4, √(9)`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{config::Config, keypad::Keypad, script::runner::run_script};

/// Settings for the command-line front end.
///
/// Gathers the options that shape a run: whether the description is printed,
/// how operands are rendered, and which variables are bound up front.
pub mod config;
/// The expression engine.
///
/// This module owns the program stack and everything that operates on it:
/// the token model, the operator and variable tables, the recursive
/// evaluator and its mirror image, the infix renderer.
///
/// # Responsibilities
/// - Appends operands, variable references and operators to the program.
/// - Evaluates the program without mutating it.
/// - Describes the program as a list of infix expressions.
pub mod engine;
/// Provides error types for script and setting input.
///
/// The engine reports the absence of a result as `None`. Errors only arise at
/// the outer surfaces, when text has to be turned into keypad presses.
pub mod error;
/// The keypad collaborator.
///
/// Buffers digits as they are keyed in and forwards complete entries,
/// operators, recalls and stores to the engine, keeping track of what the
/// display shows.
pub mod keypad;
/// Scripted keypad input.
///
/// Tokenizes RPN scripts and replays them on a keypad.
pub mod script;
/// General utilities for numeric conversion and formatting.
pub mod util;

/// Runs a script and prints its result.
///
/// The result is printed on its own line. With [`Config::describe`] set, the
/// infix description is printed in front of it, followed by `=`. A script
/// without a result prints `?` in place of the value when describing and
/// nothing otherwise.
///
/// # Errors
/// Returns an error if the script contains text that cannot be tokenized.
///
/// # Examples
/// ```
/// use rpnote::{config::Config, get_result};
///
/// let res = get_result("5 3 −", &Config::default());
/// assert!(res.is_ok());
///
/// // `@` is not part of the script language.
/// let res = get_result("5 @", &Config::default());
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut keypad = Keypad::new(config.engine());
    let result = run_script(source, &mut keypad)?;

    if config.describe {
        let value = result.map_or_else(|| "?".to_string(), |v| v.to_string());
        println!("{} = {value}", keypad.description());
    } else if let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
