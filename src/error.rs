//! # Error types
//!
//! Failures are grouped by the phase in which they occur: exact arithmetic on
//! rational values, reading textual input, generating questions, and building
//! a drill configuration. Parse failures on user-submitted answers are the
//! only errors recovered locally (the caller re-prompts); everything else
//! propagates.
use std::error;
use std::fmt;

/// Failure of an exact arithmetic operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arithmetic {
    /// A rational was constructed with a zero denominator, or a division had
    /// a zero-valued divisor.
    DivisionByZero,
    /// A value whose reduced numerator or denominator does not fit the
    /// machine integer range.
    Overflow,
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "value outside the machine integer range"),
        }
    }
}

impl error::Error for Arithmetic {}

/// Failure to interpret text as a rational number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parse {
    /// The text is not an integer, fraction or decimal literal.
    Malformed(String),
    /// The text is well-formed but denotes an invalid value, such as a
    /// fraction with denominator zero.
    Arithmetic(Arithmetic),
}

impl From<Arithmetic> for Parse {
    fn from(error: Arithmetic) -> Self {
        Self::Arithmetic(error)
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Malformed(description) => write!(f, "malformed number: {}", description),
            Self::Arithmetic(error) => error.fmt(f),
        }
    }
}

impl error::Error for Parse {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Malformed(_) => None,
            Self::Arithmetic(error) => Some(error),
        }
    }
}

/// Failure to generate an operand or a question.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Generate {
    /// Applying the operator failed.
    Arithmetic(Arithmetic),
    /// A bounded rejection sampling loop ran out of attempts. Rejection is
    /// rare under sensible ranges, so this signals a degenerate configuration
    /// rather than bad luck.
    ExhaustedRetries {
        /// What was being sampled for.
        subject: &'static str,
        /// Number of attempts that were made.
        cap: u32,
    },
}

impl From<Arithmetic> for Generate {
    fn from(error: Arithmetic) -> Self {
        Self::Arithmetic(error)
    }
}

impl fmt::Display for Generate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Arithmetic(error) => error.fmt(f),
            Self::ExhaustedRetries { subject, cap } => write!(
                f, "no valid {} found within {} attempts", subject, cap,
            ),
        }
    }
}

impl error::Error for Generate {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Arithmetic(error) => Some(error),
            Self::ExhaustedRetries { .. } => None,
        }
    }
}

/// Invalid drill configuration, rejected before any generation starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invalid {
    /// An operand range with `max < min`.
    EmptyRange {
        min: i64,
        max: i64,
    },
    /// An operator tag that names no known operator.
    UnknownOperator(String),
    /// An operand kind tag that names no known kind.
    UnknownOperandKind(String),
    /// A comparison constraint tag that names no known constraint.
    UnknownComparison(String),
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => write!(
                f, "empty operand range: minimum {} exceeds maximum {}", min, max,
            ),
            Self::UnknownOperator(tag) => write!(f, "unknown operator \"{}\"", tag),
            Self::UnknownOperandKind(tag) => write!(f, "unknown operand kind \"{}\"", tag),
            Self::UnknownComparison(tag) => write!(f, "unknown comparison constraint \"{}\"", tag),
        }
    }
}

impl error::Error for Invalid {}
