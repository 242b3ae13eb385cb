use logos::{Lexer, Logos};

use crate::engine::registry::{ADD, DIVIDE, MULTIPLY, SUBTRACT};

/// A single word of an RPN script.
///
/// Words are separated by whitespace. ASCII spellings of the arithmetic
/// operators are mapped to the symbols the engine registers, so `*` and `×`
/// produce the same token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Number literals such as `3`, `2.5`, `.5` or `1e3`, kept as written.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator symbols. Unknown symbols such as `%` are passed on as-is.
    #[token("+", |_| ADD.to_string())]
    #[token("×", |_| MULTIPLY.to_string())]
    #[token("*", |_| MULTIPLY.to_string())]
    #[token("÷", |_| DIVIDE.to_string())]
    #[token("/", |_| DIVIDE.to_string())]
    #[token("−", |_| SUBTRACT.to_string())]
    #[token("-", |_| SUBTRACT.to_string())]
    #[regex(r"[√%^!&±]", |lex| lex.slice().to_string())]
    Operator(String),
    /// Stores the displayed value into a variable: `→M` or `->M`.
    #[regex(r"(→|->)\p{L}[\p{L}\p{N}_]*", store_target)]
    Store(String),
    /// A store arrow that is not followed by a name.
    #[token("→")]
    #[token("->")]
    StoreArrow,
    /// `clear`
    #[token("clear")]
    Clear,
    /// Variable or named operator, such as `π`, `M` or `sin`.
    #[regex(r"\p{L}[\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `# Comments.`
    #[token("#", skip_comment)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the script being tokenized.
    pub line: usize,
}

/// Returns the variable name following the store arrow.
fn store_target(lex: &Lexer<Token>) -> String {
    let slice = lex.slice();
    slice.strip_prefix("->")
         .or_else(|| slice.strip_prefix('→'))
         .unwrap_or(slice)
         .to_string()
}

/// Skips the rest of the line after `#`, leaving the line break in place.
fn skip_comment(lex: &mut Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    logos::Skip
}
