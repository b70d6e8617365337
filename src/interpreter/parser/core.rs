use log::debug;

use crate::{
    ast::Operator,
    error::{CalcError, ParseError, Stage},
    interpreter::{
        lexer::{Token, render_tokens},
        parser::reduce::{parse_by_prec, reduce},
    },
};

/// Result type used by the parser.
///
/// Parsing reports malformed chains as [`ParseError`], but the structural
/// divisor check runs while nodes are built, so arithmetic errors surface here
/// as well.
pub type ParseResult<T> = Result<T, CalcError>;

/// Parses and reduces a full token sequence to its value.
///
/// Precedence comes from the order of the passes: every `*`/`/` run is
/// collapsed to a number before the `+`/`-` pass sees the sequence, and a last
/// reduction folds what is left, which must be a single number.
///
/// # Parameters
/// - `tokens`: The lexer output.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - A [`ParseError`] naming the failing pass for empty input, leading or
///   trailing operators, adjacent numbers or adjacent operators.
/// - An arithmetic error for a literal zero divisor.
///
/// # Example
/// ```
/// use stagecalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// assert_eq!(parse(&tokenize("2 + 3 * 4").unwrap()).unwrap(), 14.0);
/// assert_eq!(parse(&tokenize("10 - 3 - 2").unwrap()).unwrap(), 5.0);
/// assert!(parse(&tokenize("3 +").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<f64> {
    let products = parse_by_prec(tokens, Operator::MULTIPLICATIVE, Stage::Multiplicative)?;
    debug!("{}: {}", Stage::Multiplicative, render_tokens(&products));

    let sums = parse_by_prec(&products, Operator::ADDITIVE, Stage::Additive)?;
    debug!("{}: {}", Stage::Additive, render_tokens(&sums));

    let (value, rest) = reduce(&sums, Stage::Final)?;
    if let Some(found) = rest.first() {
        return Err(ParseError::UnexpectedToken { stage:     Stage::Final,
                                                 found:     *found,
                                                 remaining: render_tokens(rest), }.into());
    }

    debug!("{}: {value}", Stage::Final);
    Ok(value)
}
