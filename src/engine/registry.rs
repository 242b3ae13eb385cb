use std::collections::HashMap;

use crate::engine::token::{BinaryFn, Token, UnaryFn};

/// Symbol for multiplication.
pub const MULTIPLY: &str = "×";
/// Symbol for division.
pub const DIVIDE: &str = "÷";
/// Symbol for addition.
pub const ADD: &str = "+";
/// Symbol for subtraction. This is the unicode minus sign, not a hyphen.
pub const SUBTRACT: &str = "−";
/// Symbol for the square root.
pub const SQUARE_ROOT: &str = "√";
/// Symbol for the sine function.
pub const SINE: &str = "sin";
/// Symbol for the cosine function.
pub const COSINE: &str = "cos";
/// Name of the pre-registered circle constant.
pub const PI: &str = "π";

/// Maps operator symbols to the token pushed when the operator is applied.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    known: HashMap<String, Token>,
}

impl OperatorRegistry {
    /// Creates a registry without any operators.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in operator set: `×`, `÷`, `+`,
    /// `−`, `√`, `sin` and `cos`.
    ///
    /// Binary operators receive the top of the stack first, so `÷` and `−`
    /// compute `second ÷ first` and `second − first`.
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::{registry::OperatorRegistry, token::Token};
    ///
    /// let registry = OperatorRegistry::builtin();
    /// let Some(Token::BinaryOp(_, subtract)) = registry.get("−") else {
    ///     panic!("subtraction is built in");
    /// };
    /// // 5 was pushed first, 3 is on top.
    /// assert_eq!(subtract(3.0, 5.0), 2.0);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.learn_binary(MULTIPLY, |first, second| first * second);
        registry.learn_binary(DIVIDE, |first, second| second / first);
        registry.learn_binary(ADD, |first, second| first + second);
        registry.learn_binary(SUBTRACT, |first, second| second - first);
        registry.learn_unary(SQUARE_ROOT, f64::sqrt);
        registry.learn_unary(SINE, f64::sin);
        registry.learn_unary(COSINE, f64::cos);
        registry
    }

    /// Registers a unary operator, replacing any operator with the same
    /// symbol.
    pub fn learn_unary(&mut self, symbol: &str, function: UnaryFn) {
        self.learn(Token::UnaryOp(symbol.to_string(), function));
    }

    /// Registers a binary operator, replacing any operator with the same
    /// symbol.
    pub fn learn_binary(&mut self, symbol: &str, function: BinaryFn) {
        self.learn(Token::BinaryOp(symbol.to_string(), function));
    }

    /// Registers an operator token under its own symbol.
    fn learn(&mut self, token: Token) {
        if let Some(symbol) = token.symbol() {
            self.known.insert(symbol.to_string(), token);
        }
    }

    /// Looks up the token for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.known.get(symbol)
    }

    /// Returns `true` if `symbol` names a known operator.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.known.contains_key(symbol)
    }

    /// Returns the known symbols in sorted order.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.known.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

/// Variable bindings, read late when the program is evaluated.
#[derive(Debug, Clone)]
pub struct VariableTable {
    values: HashMap<String, f64>,
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableTable {
    /// Creates a table that only binds `π`.
    #[must_use]
    pub fn new() -> Self {
        Self { values: HashMap::from([(PI.to_string(), std::f64::consts::PI)]) }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
