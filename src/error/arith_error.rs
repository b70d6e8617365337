#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents arithmetic failures.
pub enum ArithError {
    /// A division node was built with the literal zero as its divisor.
    DivisionByZero {
        /// The rendered dividend.
        dividend: String,
    },
    /// The result is infinite or NaN and has no printable value.
    UndefinedValue,
}

impl std::fmt::Display for ArithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0"),
            Self::UndefinedValue => write!(f, "Undefined value"),
        }
    }
}

impl std::error::Error for ArithError {}
