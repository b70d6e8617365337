use log::trace;

use crate::{
    ast::Expr,
    error::{ParseError, Stage},
    interpreter::{
        lexer::{Token, render_tokens},
        parser::core::ParseResult,
    },
};

/// Folds a leading run of same-precedence operations into one value.
///
/// The slice must start with a number. The precedence of the first operator
/// becomes the target; every following `operator number` pair at that
/// precedence is combined with the running value. Each step builds the binary
/// node (which rejects a literal zero divisor) and evaluates it at once, so the
/// running value is always a plain number.
///
/// Reduction stops at the first operator of a different precedence or at the
/// end of input.
///
/// # Parameters
/// - `tokens`: Token slice starting at the number that opens the run.
/// - `stage`: The pass requesting the reduction, for error reporting.
///
/// # Returns
/// The reduced value and the unconsumed remainder, which is either empty or
/// starts with an operator.
///
/// # Errors
/// - `UnexpectedToken` if the slice does not start with a number, or a number
///   directly follows a number or an operator follows an operator.
/// - `UnexpectedEndOfInput` if the slice is empty or ends with an operator.
/// - `DivisionByZero` from the structural divisor check.
///
/// # Example
/// ```
/// use stagecalc::{
///     error::Stage,
///     interpreter::{lexer::tokenize, parser::reduce::reduce},
/// };
///
/// let tokens = tokenize("8 / 2 * 3 + 1").unwrap();
/// let (value, rest) = reduce(&tokens, Stage::Multiplicative).unwrap();
/// assert_eq!(value, 12.0);
/// assert_eq!(rest.len(), 2);
/// ```
pub fn reduce(tokens: &[Token], stage: Stage) -> ParseResult<(f64, &[Token])> {
    let (mut acc, mut rest) = match tokens.split_first() {
        Some((Token::Number(value), tail)) => (Expr::Number(*value), tail),
        Some((found, _)) => return Err(unexpected(stage, *found, tokens).into()),
        None => return Err(end_of_input(stage, tokens).into()),
    };
    let mut target = None;

    while let Some((Token::Operator(op), tail)) = rest.split_first() {
        if *target.get_or_insert(op.precedence()) != op.precedence() {
            break;
        }

        let rhs = match tail.split_first() {
            Some((Token::Number(value), _)) => *value,
            Some((found, _)) => return Err(unexpected(stage, *found, tokens).into()),
            None => return Err(end_of_input(stage, tokens).into()),
        };

        let node = Expr::binary(*op, acc, Expr::Number(rhs))?;
        let value = node.eval();
        trace!("{stage}: {node} = {value}");

        acc = Expr::Number(value);
        rest = &tail[1..];
    }

    if let Some(found @ Token::Number(_)) = rest.first() {
        return Err(unexpected(stage, *found, tokens).into());
    }

    Ok((acc.eval(), rest))
}

/// Collapses every run of operators at precedence `level` into one number.
///
/// Scans the sequence left to right. A number immediately followed by an
/// operator at `level` opens a run, which [`reduce`] folds into a single
/// synthetic `Number` token. Every other token is copied through unchanged,
/// so runs at other levels survive for a later pass.
///
/// # Parameters
/// - `tokens`: The sequence to scan.
/// - `level`: Precedence of the operators to fold.
/// - `stage`: The pass name used in errors and logs.
///
/// # Returns
/// A new sequence where no number is followed by an operator at `level`.
///
/// # Example
/// ```
/// use stagecalc::{
///     ast::Operator,
///     error::Stage,
///     interpreter::{
///         lexer::{render_tokens, tokenize},
///         parser::reduce::parse_by_prec,
///     },
/// };
///
/// let tokens = tokenize("1 + 2 * 3 - 8 / 4").unwrap();
/// let folded = parse_by_prec(&tokens, Operator::MULTIPLICATIVE, Stage::Multiplicative).unwrap();
/// assert_eq!(render_tokens(&folded), "1 + 6 - 2");
/// ```
pub fn parse_by_prec(tokens: &[Token], level: u8, stage: Stage) -> ParseResult<Vec<Token>> {
    let mut folded = Vec::with_capacity(tokens.len());
    let mut rest = tokens;

    while let Some((first, tail)) = rest.split_first() {
        if let Token::Number(_) = first
           && let Some(Token::Operator(op)) = tail.first()
           && op.precedence() == level
        {
            let (value, remaining) = reduce(rest, stage)?;
            folded.push(Token::Number(value));
            rest = remaining;
            continue;
        }

        folded.push(*first);
        rest = tail;
    }

    Ok(folded)
}

fn unexpected(stage: Stage, found: Token, tokens: &[Token]) -> ParseError {
    ParseError::UnexpectedToken { stage,
                                  found,
                                  remaining: render_tokens(tokens) }
}

fn end_of_input(stage: Stage, tokens: &[Token]) -> ParseError {
    ParseError::UnexpectedEndOfInput { stage,
                                       remaining: render_tokens(tokens) }
}
