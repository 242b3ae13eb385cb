/// The script lexer turns source text into words.
///
/// Scripts are sequences of whitespace-separated numbers, operator symbols,
/// names, store arrows and the `clear` keyword. `#` starts a comment that runs
/// to the end of the line.
pub mod lexer;
/// The runner presses each word of a script on a keypad.
pub mod runner;
