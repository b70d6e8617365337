use crate::ast::{Expr, Operator};

impl Expr {
    /// Evaluates the tree to a floating-point value.
    ///
    /// Numbers yield their value; binary nodes apply their operator to the
    /// evaluated children. Evaluation never fails: a divisor that evaluates to
    /// zero without being the literal zero yields infinity or NaN, which the
    /// display layer rejects. The tree is only read, so evaluating it again
    /// gives the same value.
    ///
    /// # Example
    /// ```
    /// use stagecalc::ast::{Expr, Operator};
    ///
    /// let product = Expr::binary(Operator::Multiply, Expr::Number(3.0), Expr::Number(4.0)).unwrap();
    /// let sum = Expr::binary(Operator::Add, Expr::Number(2.0), product).unwrap();
    /// assert_eq!(sum.eval(), 14.0);
    ///
    /// let difference = Expr::binary(Operator::Subtract, Expr::Number(1.0), Expr::Number(1.0)).unwrap();
    /// let quotient = Expr::binary(Operator::Divide, Expr::Number(1.0), difference).unwrap();
    /// assert!(quotient.eval().is_infinite());
    /// ```
    #[must_use]
    pub fn eval(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Add(left, right) => Operator::Add.apply(left.eval(), right.eval()),
            Self::Subtract(left, right) => Operator::Subtract.apply(left.eval(), right.eval()),
            Self::Multiply(left, right) => Operator::Multiply.apply(left.eval(), right.eval()),
            Self::Divide(left, right) => Operator::Divide.apply(left.eval(), right.eval()),
        }
    }
}
