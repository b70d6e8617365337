/// Lexical errors.
///
/// Raised while turning source text into tokens, when a character is not part
/// of the calculator's alphabet.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token sequence is not a strict alternation of numbers and
/// operators at some reduction stage.
pub mod parse_error;
/// Arithmetic errors.
///
/// Covers the structural division-by-zero check performed while building
/// division nodes, and non-finite results rejected by the display layer.
pub mod arith_error;

pub use arith_error::ArithError;
pub use lex_error::LexError;
pub use parse_error::{ParseError, Stage};

/// Any failure of the calculation pipeline.
#[derive(Debug)]
pub enum CalcError {
    /// The input contained an unsupported character.
    Lex(LexError),
    /// The tokens did not form a number/operator chain.
    Parse(ParseError),
    /// A literal zero divisor, or a result that cannot be displayed.
    Arith(ArithError),
}

/// Result type returned by the pipeline entry points.
pub type CalcResult<T> = Result<T, CalcError>;

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Arith(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Arith(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ArithError> for CalcError {
    fn from(e: ArithError) -> Self {
        Self::Arith(e)
    }
}
