//! Binary operators.
//!
//! [`Operator`] names every infix token of the language. Arithmetic tokens
//! route to [`arithmetic`], comparison tokens to the total order in
//! [`jqlite_foundation::compare`]. The short-circuit tokens (`and`, `or`,
//! `//`) decide whether to evaluate their right side at all, so only the
//! filter evaluator can run them.

pub mod arithmetic;
pub mod dispatch;

use std::fmt;
use std::str::FromStr;

use jqlite_foundation::{Error, Result, Value, compare};

/// A binary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `and`
    And,
    /// `or`
    Or,
    /// `//`
    Alt,
}

impl Operator {
    /// Every operator, in token-table order.
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Lt,
        Self::Ge,
        Self::Le,
        Self::And,
        Self::Or,
        Self::Alt,
    ];

    /// Returns the source token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::And => "and",
            Self::Or => "or",
            Self::Alt => "//",
        }
    }

    /// Returns true for operators that may skip their right operand.
    #[must_use]
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Alt)
    }

    /// Returns true for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Gt | Self::Lt | Self::Ge | Self::Le
        )
    }

    /// Applies the operator to two evaluated operands.
    ///
    /// # Errors
    ///
    /// Returns the arithmetic operator's error for unsupported operand pairs
    /// and zero divisors. Comparisons never fail.
    ///
    /// # Panics
    ///
    /// Panics if called with a short-circuit operator; check
    /// [`Operator::is_short_circuit`] first.
    pub fn eval(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            Self::Add => arithmetic::add(lhs, rhs),
            Self::Subtract => arithmetic::subtract(lhs, rhs),
            Self::Multiply => arithmetic::multiply(lhs, rhs),
            Self::Divide => arithmetic::divide(lhs, rhs),
            Self::Modulo => arithmetic::modulo(lhs, rhs),
            Self::Eq => Ok(Value::Bool(compare(&lhs, &rhs).is_eq())),
            Self::Ne => Ok(Value::Bool(compare(&lhs, &rhs).is_ne())),
            Self::Gt => Ok(Value::Bool(compare(&lhs, &rhs).is_gt())),
            Self::Lt => Ok(Value::Bool(compare(&lhs, &rhs).is_lt())),
            Self::Ge => Ok(Value::Bool(compare(&lhs, &rhs).is_ge())),
            Self::Le => Ok(Value::Bool(compare(&lhs, &rhs).is_le())),
            Self::And | Self::Or | Self::Alt => {
                unreachable!("`{self}` must be evaluated by the filter evaluator")
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| Error::unknown_operator(s))
    }
}
