use std::fmt;

use crate::error::ArithError;

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Additive operators.
    pub const ADDITIVE: u8 = 0;
    /// Multiplicative operators, which bind tighter.
    pub const MULTIPLICATIVE: u8 = 1;

    /// Returns the binding strength of the operator.
    ///
    /// ```
    /// use stagecalc::ast::Operator;
    ///
    /// assert_eq!(Operator::Subtract.precedence(), Operator::ADDITIVE);
    /// assert_eq!(Operator::Divide.precedence(), Operator::MULTIPLICATIVE);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => Self::ADDITIVE,
            Self::Multiply | Self::Divide => Self::MULTIPLICATIVE,
        }
    }

    /// Applies the operator to two floating-point operands.
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        write!(f, "{operator}")
    }
}

/// An expression tree.
///
/// Leaves are numbers; every other node is a binary operation that owns both
/// of its operands. Trees are built bottom-up and never share nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal or an already reduced value.
    Number(f64),
    /// `left + right`
    Add(Box<Self>, Box<Self>),
    /// `left - right`
    Subtract(Box<Self>, Box<Self>),
    /// `left * right`
    Multiply(Box<Self>, Box<Self>),
    /// `left / right`
    Divide(Box<Self>, Box<Self>),
}

impl Expr {
    /// The literal zero, compared structurally against divisors.
    pub const ZERO: Self = Self::Number(0.0);

    /// Builds a binary node.
    ///
    /// Division is checked before the node exists: a divisor that is
    /// structurally equal to the literal zero is rejected. A divisor that only
    /// evaluates to zero is accepted.
    ///
    /// # Errors
    /// Returns [`ArithError::DivisionByZero`] naming the rendered dividend.
    ///
    /// # Example
    /// ```
    /// use stagecalc::ast::{Expr, Operator};
    ///
    /// let sum = Expr::binary(Operator::Add, Expr::Number(3.0), Expr::Number(2.0)).unwrap();
    /// let err = Expr::binary(Operator::Divide, sum, Expr::ZERO).unwrap_err();
    /// assert_eq!(err.to_string(), "Division by zero: (3 + 2) / 0");
    ///
    /// let ok = Expr::binary(Operator::Divide, Expr::ZERO, Expr::Number(5.0));
    /// assert!(ok.is_ok());
    /// ```
    pub fn binary(op: Operator, left: Self, right: Self) -> Result<Self, ArithError> {
        let (left, right) = (Box::new(left), Box::new(right));

        Ok(match op {
            Operator::Add => Self::Add(left, right),
            Operator::Subtract => Self::Subtract(left, right),
            Operator::Multiply => Self::Multiply(left, right),
            Operator::Divide => {
                if *right == Self::ZERO {
                    return Err(ArithError::DivisionByZero { dividend: Self::render_operand(&left,
                                                                                           op,
                                                                                           false), });
                }
                Self::Divide(left, right)
            },
        })
    }

    /// Returns the operator of a binary node, or `None` for a number.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Number(_) => None,
            Self::Add(..) => Some(Operator::Add),
            Self::Subtract(..) => Some(Operator::Subtract),
            Self::Multiply(..) => Some(Operator::Multiply),
            Self::Divide(..) => Some(Operator::Divide),
        }
    }

    /// Renders a child of a node with operator `parent`, adding parentheses
    /// only where the flat text would parse differently.
    fn render_operand(child: &Self, parent: Operator, is_right: bool) -> String {
        match child.operator() {
            Some(op)
                if op.precedence() < parent.precedence()
                   || (is_right && op.precedence() == parent.precedence()) =>
            {
                format!("({child})")
            },
            _ => child.to_string(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Add(left, right) => fmt_binary(f, Operator::Add, left, right),
            Self::Subtract(left, right) => fmt_binary(f, Operator::Subtract, left, right),
            Self::Multiply(left, right) => fmt_binary(f, Operator::Multiply, left, right),
            Self::Divide(left, right) => fmt_binary(f, Operator::Divide, left, right),
        }
    }
}

fn fmt_binary(f: &mut fmt::Formatter<'_>, op: Operator, left: &Expr, right: &Expr) -> fmt::Result {
    write!(f,
           "{} {op} {}",
           Expr::render_operand(left, op, false),
           Expr::render_operand(right, op, true))
}
