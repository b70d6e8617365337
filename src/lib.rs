//! # stagecalc
//!
//! stagecalc is a four-operator arithmetic calculator written in Rust.
//! It tokenizes an expression, resolves precedence by folding one precedence
//! level at a time, and evaluates the result with floating-point arithmetic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::CalcResult,
    interpreter::{lexer::tokenize, parser::core::parse},
    util::format::{DisplayOptions, format_result},
};

/// Defines the expression tree and the operator set.
///
/// This module declares the `Expr` tree built during reduction and the
/// `Operator` enum with its precedence levels.
///
/// # Responsibilities
/// - Defines operators, their symbols and their binding strength.
/// - Builds binary nodes, rejecting literal zero divisors.
/// - Renders trees back to text with minimal parentheses.
pub mod ast;
/// Provides unified error types for the calculation pipeline.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// displaying a result, and the `CalcError` umbrella that carries any of them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, arithmetic).
/// - Carries the failing pass and the offending tokens for parse errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lexer, parser and evaluator.
///
/// # Responsibilities
/// - Coordinates the pipeline stages.
/// - Exposes each stage for direct use.
pub mod interpreter;
/// Display helpers.
///
/// # Responsibilities
/// - Turn evaluated values into user-facing text.
pub mod util;

/// Computes the value of an arithmetic expression.
///
/// # Errors
/// Returns a lexical error for unsupported characters, a parse error for
/// malformed chains and an arithmetic error for a literal zero divisor.
///
/// # Examples
/// ```
/// use stagecalc::calculate;
///
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculate("0 / 5").unwrap(), 0.0);
/// assert!(calculate("5 / 0").is_err());
/// ```
pub fn calculate(source: &str) -> CalcResult<f64> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens from {source:?}", tokens.len());

    parse(&tokens)
}

/// Computes an expression and formats the result for display.
///
/// # Errors
/// Returns any error of [`calculate`], or an undefined-value error if the
/// result is infinite or NaN.
///
/// # Examples
/// ```
/// use stagecalc::{get_result, util::format::DisplayOptions};
///
/// let options = DisplayOptions::default();
/// assert_eq!(get_result("7 / 2", &options).unwrap(), "=> 3.5");
///
/// let overflow = format!("1{} * 10", "0".repeat(308));
/// let err = get_result(&overflow, &options).unwrap_err();
/// assert_eq!(err.to_string(), "Undefined value");
/// ```
pub fn get_result(source: &str, options: &DisplayOptions) -> CalcResult<String> {
    let value = calculate(source)?;

    Ok(format_result(value, options)?)
}
