//! # Drill elements
//!
//! The configuration vocabulary of a drill: which operator a question uses,
//! what category of operand each side draws from, and whether the two
//! operands must come out in a particular order. Free-form configuration text
//! is mapped onto these enums up front, so an unknown tag is rejected when a
//! drill is set up, not deep inside generation.
use std::str::FromStr;

use crate::data::rational::Rational;
use crate::error::{Arithmetic, Invalid};

/// Binary operation applied to the two operands of a question.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Multiply,
    Divide,
    Sum,
    Difference,
}

impl Operator {
    /// Symbol shown in a question prompt.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Sum => "+",
            Self::Difference => "−",
        }
    }

    /// Stable identifier, used in correlation keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Sum => "Sum",
            Self::Difference => "Difference",
        }
    }

    /// Apply the operator to two exact values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when dividing by a zero-valued operand; `Overflow`
    /// when a quotient does not reduce into the machine integer range.
    pub fn apply(&self, left: Rational, right: Rational) -> Result<Rational, Arithmetic> {
        Ok(match self {
            Self::Multiply => left * right,
            Self::Divide => left.checked_div(right)?,
            Self::Sum => left + right,
            Self::Difference => left - right,
        })
    }
}

impl FromStr for Operator {
    type Err = Invalid;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            "sum" => Ok(Self::Sum),
            "difference" => Ok(Self::Difference),
            _ => Err(Invalid::UnknownOperator(tag.to_string())),
        }
    }
}

/// Category controlling how a random operand is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandKind {
    /// A whole number drawn directly from the configured range.
    PositiveInteger,
    /// A whole number drawn from the configured range, then negated.
    NegativeInteger,
    /// A fraction whose display never reads as a whole number.
    ProperFraction,
}

impl OperandKind {
    /// Stable identifier, used in correlation keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PositiveInteger => "PositiveInteger",
            Self::NegativeInteger => "NegativeInteger",
            Self::ProperFraction => "ProperFraction",
        }
    }
}

impl FromStr for OperandKind {
    type Err = Invalid;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "positiveinteger" => Ok(Self::PositiveInteger),
            "negativeinteger" => Ok(Self::NegativeInteger),
            "properfraction" => Ok(Self::ProperFraction),
            _ => Err(Invalid::UnknownOperandKind(tag.to_string())),
        }
    }
}

/// Ordering requirement on the two operands, applied before the operator.
///
/// The constraint reorders the drawn values themselves, not just their
/// presentation, so for `Divide` and `Difference` it changes which problem is
/// asked. That is deliberate: "larger first" drills exist precisely to keep
/// subtraction results positive and quotients above one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparison {
    /// No requirement.
    Any,
    /// The first operand must be strictly greater than the second.
    FirstGreater,
    /// The first operand must be strictly less than the second.
    FirstLess,
}

impl FromStr for Comparison {
    type Err = Invalid;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "firstgreater" => Ok(Self::FirstGreater),
            "firstless" => Ok(Self::FirstLess),
            _ => Err(Invalid::UnknownComparison(tag.to_string())),
        }
    }
}
