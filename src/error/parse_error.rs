use std::fmt;

use crate::interpreter::lexer::Token;

/// Names the reduction pass that was running when parsing failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Folding `*` and `/` runs.
    Multiplicative,
    /// Folding `+` and `-` runs.
    Additive,
    /// The closing reduction over the remaining chain.
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Multiplicative => "multiplicative pass",
            Self::Additive => "additive pass",
            Self::Final => "final reduction",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token where the number/operator alternation forbids it.
    UnexpectedToken {
        /// The pass that rejected the token.
        stage:     Stage,
        /// The token encountered.
        found:     Token,
        /// The tokens left at the point of failure, rendered as text.
        remaining: String,
    },
    /// Input ended where a number was required.
    UnexpectedEndOfInput {
        /// The pass that ran out of tokens.
        stage:     Stage,
        /// The tokens of the unfinished chain, rendered as text.
        remaining: String,
    },
}

impl ParseError {
    /// Returns the pass that produced the error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::UnexpectedToken { stage, .. } | Self::UnexpectedEndOfInput { stage, .. } => {
                *stage
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { stage,
                                    found,
                                    remaining, } => write!(f,
                                                           "Parse error in {stage}: Unexpected token '{found}' in \"{remaining}\"."),
            Self::UnexpectedEndOfInput { stage, remaining } => write!(f,
                                                                      "Parse error in {stage}: Unexpected end of input after \"{remaining}\"."),
        }
    }
}

impl std::error::Error for ParseError {}
