use std::fmt;

/// Signature of a unary operator such as `√`.
pub type UnaryFn = fn(f64) -> f64;
/// Signature of a binary operator such as `+`.
///
/// The first argument is the operand on top of the stack, the second one is
/// the operand below it.
pub type BinaryFn = fn(f64, f64) -> f64;

/// A single entry of the program stack.
///
/// Tokens are immutable once pushed. Operators and variables are identified
/// by their symbol, which is used both for display and as the key when
/// rendering the infix description.
#[derive(Debug, Clone)]
pub enum Token {
    /// A literal number.
    Operand(f64),
    /// A reference to a variable, resolved when the program is evaluated.
    VariableRef(String),
    /// An operator taking a single operand, such as `sin`.
    UnaryOp(String, UnaryFn),
    /// An operator taking two operands, such as `×`.
    BinaryOp(String, BinaryFn),
}

impl Token {
    /// Returns the symbol of an operator or variable token, or `None` for
    /// operands.
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::token::Token;
    ///
    /// assert_eq!(Token::VariableRef("π".into()).symbol(), Some("π"));
    /// assert_eq!(Token::Operand(1.0).symbol(), None);
    /// ```
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Operand(_) => None,
            Self::VariableRef(symbol) | Self::UnaryOp(symbol, _) | Self::BinaryOp(symbol, _) => {
                Some(symbol.as_str())
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::VariableRef(symbol) | Self::UnaryOp(symbol, _) | Self::BinaryOp(symbol, _) => {
                write!(f, "{symbol}")
            },
        }
    }
}
