use log::debug;

use crate::engine::{
    registry::{OperatorRegistry, VariableTable},
    token::Token,
};

/// How operands are written when rendering the infix description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperandStyle {
    /// Operands are truncated toward zero, so `2.5` renders as `2`.
    #[default]
    Truncated,
    /// Operands are written with their shortest exact representation.
    Exact,
}

/// Holds the RPN program together with the operator and variable tables.
///
/// The program is append-only apart from [`ExpressionEngine::clear`]. Every
/// mutating call re-evaluates the whole program and returns the result, which
/// is `None` whenever the program cannot be evaluated (empty, unknown
/// variable, or missing operands).
///
/// ## Usage
/// ```
/// use rpnote::engine::core::ExpressionEngine;
///
/// let mut engine = ExpressionEngine::new();
/// engine.push_operand(5.0);
/// engine.push_operand(3.0);
/// assert_eq!(engine.apply_operator("−"), Some(2.0));
/// assert_eq!(engine.render_description(), "5−3");
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    pub(crate) program:       Vec<Token>,
    pub(crate) operators:     OperatorRegistry,
    pub(crate) variables:     VariableTable,
    pub(crate) operand_style: OperandStyle,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Creates an engine with the built-in operators, `π` bound, and an
    /// empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::with_operators(OperatorRegistry::builtin())
    }

    /// Creates an engine over a custom operator set.
    ///
    /// The registry is fixed for the lifetime of the engine.
    #[must_use]
    pub fn with_operators(operators: OperatorRegistry) -> Self {
        Self { program: Vec::new(),
               operators,
               variables: VariableTable::new(),
               operand_style: OperandStyle::default() }
    }

    /// Selects how operands are rendered by
    /// [`ExpressionEngine::render_description`].
    #[must_use]
    pub const fn with_operand_style(mut self, style: OperandStyle) -> Self {
        self.operand_style = style;
        self
    }

    /// Binds `name` to `value` without touching the program.
    #[must_use]
    pub fn with_variable(mut self, name: &str, value: f64) -> Self {
        self.variables.set(name, value);
        self
    }

    /// Appends `tokens` to the program without evaluating after each one.
    ///
    /// Operator tokens are typically taken from [`ExpressionEngine::operators`].
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::{core::ExpressionEngine, token::Token};
    ///
    /// let engine = ExpressionEngine::new();
    /// let add = engine.operators().get("+").cloned().unwrap();
    /// let engine = engine.with_tokens([Token::Operand(2.0), Token::Operand(3.0), add]);
    /// assert_eq!(engine.evaluate(), Some(5.0));
    /// ```
    #[must_use]
    pub fn with_tokens(mut self, tokens: impl IntoIterator<Item = Token>) -> Self {
        self.program.extend(tokens);
        self
    }

    /// Appends an operand and returns the new result of the program.
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.push_token(Token::Operand(value))
    }

    /// Appends a reference to `name` if the variable is bound.
    ///
    /// Unknown variables leave the program untouched and return `None`.
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::core::ExpressionEngine;
    ///
    /// let mut engine = ExpressionEngine::new();
    /// assert_eq!(engine.push_variable_ref("x"), None);
    /// assert!(engine.is_empty());
    /// assert_eq!(engine.push_variable_ref("π"), Some(std::f64::consts::PI));
    /// ```
    pub fn push_variable_ref(&mut self, name: &str) -> Option<f64> {
        if !self.variables.contains(name) {
            debug!("ignoring reference to unknown variable '{name}'");
            return None;
        }

        self.push_token(Token::VariableRef(name.to_string()))
    }

    /// Binds `name` to `value` and then pushes a reference to it.
    ///
    /// References pushed earlier see the new value too.
    pub fn set_variable(&mut self, name: &str, value: f64) -> Option<f64> {
        debug!("set variable '{name}' = {value}");
        self.variables.set(name, value);
        self.push_variable_ref(name)
    }

    /// Appends the operator registered as `symbol` and evaluates.
    ///
    /// Unknown symbols are ignored, in which case the result of the unchanged
    /// program is returned.
    pub fn apply_operator(&mut self, symbol: &str) -> Option<f64> {
        match self.operators.get(symbol).cloned() {
            Some(token) => self.push_token(token),
            None => {
                debug!("ignoring unknown operator '{symbol}'");
                self.evaluate()
            },
        }
    }

    /// Appends a token that has already been validated and evaluates.
    fn push_token(&mut self, token: Token) -> Option<f64> {
        debug!("push '{token}' onto {} token(s)", self.program.len());
        self.program.push(token);
        self.evaluate()
    }

    /// Empties the program. Variables and operators are kept.
    pub fn clear(&mut self) {
        debug!("clear program of {} token(s)", self.program.len());
        self.program.clear();
    }

    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    /// The tokens pushed so far, oldest first.
    #[must_use]
    pub fn program(&self) -> &[Token] {
        &self.program
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    #[must_use]
    pub const fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    #[must_use]
    pub const fn operand_style(&self) -> OperandStyle {
        self.operand_style
    }
}
