use std::fmt;

use logos::Logos;

use crate::{ast::Operator, error::LexError};

/// Represents a lexical token in the source input.
///
/// A calculator expression is a flat chain of numbers and operators, so the
/// token set is small: every numeric literal becomes a `Number` and every
/// operator symbol becomes an `Operator`. Whitespace is skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `3.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Converts source text into an ordered token sequence.
///
/// The lexer does not check that numbers and operators alternate; a
/// malformed chain such as `3 3` tokenizes fine and is rejected by the parser.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that is
/// neither whitespace, a digit, a decimal point nor one of `+ - * /`.
///
/// # Example
/// ```
/// use stagecalc::{
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12 + .5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(12.0), Token::Operator(Operator::Add), Token::Number(0.5)]);
///
/// assert!(tokenize("3 & 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(LexError::UnexpectedCharacter { character: lexer.slice().to_string(),
                                                       position:  lexer.span().start, });
        }
    }

    Ok(tokens)
}

/// Renders a token slice as space-separated text, for diagnostics.
///
/// ```
/// use stagecalc::interpreter::lexer::{render_tokens, tokenize};
///
/// let tokens = tokenize("3+  4.50").unwrap();
/// assert_eq!(render_tokens(&tokens), "3 + 4.5");
/// ```
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes logos report an
///   error for the token.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
