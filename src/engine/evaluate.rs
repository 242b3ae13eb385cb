use log::trace;

use crate::engine::{
    core::ExpressionEngine,
    token::{BinaryFn, Token, UnaryFn},
};

/// Outcome of evaluating a prefix of the program.
///
/// `remainder` is the length of the prefix that was not consumed. On failure
/// it equals the length that was passed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub result:    Option<f64>,
    pub remainder: usize,
}

impl Evaluation {
    const fn failed(end: usize) -> Self {
        Self { result:    None,
               remainder: end, }
    }
}

impl ExpressionEngine {
    /// Evaluates the whole program without changing it.
    ///
    /// Returns `None` for an empty program, an unbound variable, or an
    /// operator that lacks operands.
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::core::ExpressionEngine;
    ///
    /// let mut engine = ExpressionEngine::new();
    /// assert_eq!(engine.evaluate(), None);
    ///
    /// engine.push_operand(9.0);
    /// engine.apply_operator("√");
    /// assert_eq!(engine.evaluate(), Some(3.0));
    /// assert_eq!(engine.evaluate(), Some(3.0));
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> Option<f64> {
        let evaluation = self.eval_prefix(self.program.len());
        trace!("evaluated {} token(s) to {:?}", self.program.len(), evaluation.result);
        evaluation.result
    }

    /// Evaluates `program[..end]` from its last token backwards.
    ///
    /// The last token decides how many preceding tokens are consumed: operands
    /// and variables consume nothing, unary operators one sub-expression, and
    /// binary operators two. The sub-expression evaluated first is the one
    /// closest to the top of the stack and is passed first to binary
    /// functions.
    ///
    /// Pending operators are kept on an explicit work stack, so arbitrarily
    /// deep programs are evaluated without recursion.
    #[must_use]
    pub fn eval_prefix(&self, end: usize) -> Evaluation {
        if end > self.program.len() {
            return Evaluation::failed(end);
        }
        let mut pending = Vec::new();
        let mut position = end;

        loop {
            let Some(token) = position.checked_sub(1).map(|last| &self.program[last]) else {
                return Evaluation::failed(end);
            };
            position -= 1;

            let mut value = match token {
                Token::Operand(value) => *value,
                Token::VariableRef(name) => match self.variables.get(name) {
                    Some(value) => value,
                    None => return Evaluation::failed(end),
                },
                Token::UnaryOp(_, function) => {
                    pending.push(Pending::Unary(*function));
                    continue;
                },
                Token::BinaryOp(_, function) => {
                    pending.push(Pending::FirstOperand(*function));
                    continue;
                },
            };

            // A complete sub-expression: feed it to the operators waiting on it.
            loop {
                match pending.pop() {
                    None => {
                        return Evaluation { result:    Some(value),
                                            remainder: position, };
                    },
                    Some(Pending::Unary(function)) => value = function(value),
                    Some(Pending::FirstOperand(function)) => {
                        pending.push(Pending::SecondOperand(function, value));
                        break;
                    },
                    Some(Pending::SecondOperand(function, first)) => value = function(first, value),
                }
            }
        }
    }
}

/// An operator still waiting for operands.
enum Pending {
    Unary(UnaryFn),
    FirstOperand(BinaryFn),
    SecondOperand(BinaryFn, f64),
}
