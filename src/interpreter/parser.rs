/// Entry point of the parser.
///
/// Runs the reduction passes in precedence order and checks that the final
/// chain is fully consumed.
pub mod core;
/// The reduction primitives.
///
/// `reduce` folds one run of same-precedence operations; `parse_by_prec`
/// applies it to every run at a given level.
pub mod reduce;
