/// Tree evaluation.
///
/// Walks an expression tree and applies IEEE-754 arithmetic at every node.
pub mod core;
