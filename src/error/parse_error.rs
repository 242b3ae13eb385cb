#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a script or a
/// command-line setting.
pub enum ParseError {
    /// Found text that is not a number, name, operator or keyword.
    UnexpectedToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A number literal could not be read as a finite value.
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A store arrow (`→` or `->`) was not followed by a variable name.
    MissingVariableName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable preset was not of the form `NAME=VALUE`.
    InvalidAssignment {
        /// The setting as given.
        setting: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Invalid number: {literal}.")
            },
            Self::MissingVariableName { line } => write!(f,
                                                         "Error on line {line}: Expected a variable name after the store arrow. Example: 7 →M"),
            Self::InvalidAssignment { setting } => write!(f,
                                                          "Invalid variable setting '{setting}'. Expected NAME=VALUE, for example M=7."),
        }
    }
}

impl std::error::Error for ParseError {}
