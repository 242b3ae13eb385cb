use logos::Logos;

use crate::{
    error::ParseError,
    keypad::Keypad,
    script::lexer::{LexerExtras, Token},
    util::num::parse_entry,
};

/// Runs an RPN script against a keypad and returns the value left on the
/// display.
///
/// Each word is pressed on the keypad in order: numbers are keyed in and
/// entered as soon as the next word arrives, names of known operators are
/// applied, and any other name is recalled as a variable. Words the engine
/// does not understand (an unknown operator symbol or an unbound variable)
/// are ignored, just like pressing a button that does nothing.
///
/// # Errors
/// Returns a [`ParseError`] for text that is not a word of the script
/// language, for number literals that overflow, and for a store arrow
/// without a variable name. Words before the error have already been
/// applied to the keypad.
///
/// # Example
/// ```
/// use rpnote::{keypad::Keypad, script::runner::run_script};
///
/// let mut keypad = Keypad::default();
/// let result = run_script("3 4 + 2 ×", &mut keypad).unwrap();
/// assert_eq!(result, Some(14.0));
/// assert_eq!(keypad.description(), "3+4×2");
/// ```
pub fn run_script(source: &str, keypad: &mut Keypad) -> Result<Option<f64>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        let Ok(token) = token else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line });
        };

        match token {
            Token::Number(literal) => {
                if parse_entry(&literal).is_none() {
                    return Err(ParseError::InvalidNumber { literal, line });
                }
                if keypad.is_typing() {
                    keypad.enter();
                }
                keypad.key_in(&literal);
            },
            Token::Operator(symbol) => {
                keypad.operate(&symbol);
            },
            Token::Name(name) => {
                if keypad.engine().operators().contains(&name) {
                    keypad.operate(&name);
                } else {
                    keypad.recall(&name);
                }
            },
            Token::Store(name) => {
                keypad.store(&name);
            },
            Token::StoreArrow => return Err(ParseError::MissingVariableName { line }),
            Token::Clear => keypad.clear(),
            Token::Comment | Token::NewLine | Token::Ignored => {},
        }
    }

    if keypad.is_typing() {
        keypad.enter();
    }

    Ok(keypad.display())
}
