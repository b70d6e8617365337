/// The evaluator module computes the value of expression trees.
///
/// # Responsibilities
/// - Evaluates `Expr` nodes with IEEE-754 floating-point arithmetic.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw input and produces a sequence of number and
/// operator tokens, skipping whitespace. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses integer and decimal literals into `f64`.
/// - Reports lexical errors for unsupported characters.
pub mod lexer;
/// The parser module reduces tokens to a value, honouring precedence.
///
/// Instead of a recursive-descent grammar, the parser makes one pass per
/// precedence level, from tightest to loosest, folding each run of
/// same-precedence operations into a single number.
///
/// # Responsibilities
/// - Folds `*` and `/` runs, then `+` and `-` runs, left to right.
/// - Builds a binary node for every step and rejects literal zero divisors.
/// - Reports malformed chains with the name of the failing pass.
pub mod parser;
