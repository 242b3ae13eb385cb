use crate::{
    engine::{core::ExpressionEngine, token::Token},
    util::num::{format_operand, is_numeric},
};

/// Placeholder written where a binary operator is missing its left operand.
pub const MISSING_OPERAND: &str = "?";

/// Infix text for a prefix of the program.
///
/// `remainder` is the length of the prefix that was not consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub text:      String,
    pub remainder: usize,
}

impl ExpressionEngine {
    /// Describes the program as infix text.
    ///
    /// Every complete expression on the stack is rendered separately and the
    /// expressions are joined with `", "`, oldest first.
    ///
    /// # Example
    /// ```
    /// use rpnote::engine::core::ExpressionEngine;
    ///
    /// let mut engine = ExpressionEngine::new();
    /// engine.push_operand(3.0);
    /// engine.push_operand(4.0);
    /// engine.apply_operator("+");
    /// engine.push_operand(9.0);
    /// engine.apply_operator("√");
    /// assert_eq!(engine.render_description(), "3+4, √(9)");
    /// ```
    #[must_use]
    pub fn render_description(&self) -> String {
        let mut rendering = self.render_prefix(self.program.len());
        let mut expressions = vec![rendering.text];

        while rendering.remainder > 0 {
            rendering = self.render_prefix(rendering.remainder);
            expressions.push(rendering.text);
        }

        expressions.reverse();
        expressions.join(", ")
    }

    /// Renders `program[..end]` from its last token backwards, consuming the
    /// same tokens [`ExpressionEngine::eval_prefix`] would.
    ///
    /// Missing operands never fail: a unary operator renders with empty
    /// parentheses and a binary operator uses `?` for its left side. The right
    /// side of a binary operator is parenthesized unless it is a number or
    /// already contains parentheses.
    ///
    /// Like evaluation, this walks the program with an explicit work stack
    /// instead of recursing.
    #[must_use]
    pub fn render_prefix(&self, end: usize) -> Rendering {
        let mut pending = Vec::new();
        let mut position = end;

        loop {
            let mut text = match position.checked_sub(1).and_then(|last| self.program.get(last)) {
                None => String::new(),
                Some(token) => {
                    position -= 1;
                    match token {
                        Token::Operand(value) => format_operand(*value, self.operand_style),
                        Token::VariableRef(name) => name.clone(),
                        Token::UnaryOp(symbol, _) => {
                            pending.push(Pending::Unary(symbol));
                            continue;
                        },
                        Token::BinaryOp(symbol, _) => {
                            pending.push(Pending::FirstOperand(symbol));
                            continue;
                        },
                    }
                },
            };

            loop {
                match pending.pop() {
                    None => return Rendering { text, remainder: position },
                    Some(Pending::Unary(symbol)) => text = format!("{symbol}({text})"),
                    Some(Pending::FirstOperand(symbol)) => {
                        pending.push(Pending::SecondOperand(symbol, text));
                        break;
                    },
                    Some(Pending::SecondOperand(symbol, first)) => {
                        text = join_binary(text, symbol, &first);
                    },
                }
            }
        }
    }
}

/// An operator still waiting for the text of its operands.
enum Pending<'a> {
    Unary(&'a str),
    FirstOperand(&'a str),
    SecondOperand(&'a str, String),
}

/// Writes `second symbol first`, appending to `second` in place so that long
/// left-leaning chains stay linear.
fn join_binary(second: String, symbol: &str, first: &str) -> String {
    let mut text = if second.is_empty() {
        MISSING_OPERAND.to_string()
    } else {
        second
    };
    text.push_str(symbol);
    if is_numeric(first) || first.contains('(') {
        text.push_str(first);
    } else {
        text.push('(');
        text.push_str(first);
        text.push(')');
    }
    text
}
