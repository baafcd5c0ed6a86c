//! # Question composition
//!
//! Builds complete questions from a validated spec: two operands, one
//! operator, the exact result, the prompt and the correlation key.
use std::mem;

use num::Zero;
use rand::Rng;

use crate::data::elements::{Comparison, OperandKind, Operator};
use crate::data::rational::Rational;
use crate::error::{Generate, Invalid};
use crate::generate::operand::{operand, Operand};
use crate::generate::RETRY_CAP;

/// Kind and inclusive range for one operand position.
///
/// The fields are private so a spec can only exist with a well-formed range;
/// the generators rely on that. Bounds below `2^31` in magnitude keep every
/// value derived from the operands representable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperandSpec {
    kind: OperandKind,
    min: i64,
    max: i64,
}

impl OperandSpec {
    /// # Errors
    ///
    /// `EmptyRange` if `max < min`; ranges are validated here so that the
    /// generators can assume them well-formed.
    pub fn new(kind: OperandKind, min: i64, max: i64) -> Result<Self, Invalid> {
        if max < min {
            return Err(Invalid::EmptyRange { min, max });
        }

        Ok(Self { kind, min, max })
    }

    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Everything needed to generate a batch of questions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuestionSpec {
    pub operator: Operator,
    pub a: OperandSpec,
    pub b: OperandSpec,
    pub comparison: Comparison,
}

impl QuestionSpec {
    pub fn new(
        operator: Operator,
        a: OperandSpec,
        b: OperandSpec,
        comparison: Comparison,
    ) -> Self {
        Self { operator, a, b, comparison }
    }
}

/// A single practice question. Created once, never mutated; the session layer
/// and the answer checker read it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub a: Operand,
    pub b: Operand,
    pub operator: Operator,
    /// Exact outcome of applying the operator, in lowest terms.
    pub result: Rational,
    /// Text presented to the learner: `"<a> <symbol> <b>"`.
    pub prompt: String,
    /// Stable identity of this question: operator, both canonical operand
    /// values and both operand kinds. A review session stores this string to
    /// match a later attempt against the original mistake.
    pub key: String,
}

/// Generate one question.
///
/// The second operand is drawn under rejection sampling: it may not be zero
/// when the operator is `Divide`, and it may not tie with the first operand
/// when an ordering constraint is active (a tie can satisfy neither strict
/// order). If the constraint then requires it, the operands are swapped,
/// value and display together.
///
/// # Errors
///
/// `ExhaustedRetries` when operand sampling hits its cap; `Arithmetic` if
/// applying the operator fails, which the divisor guard should prevent but
/// which is propagated rather than papered over.
pub fn question<R: Rng>(rng: &mut R, spec: &QuestionSpec) -> Result<Question, Generate> {
    let mut a = operand(rng, spec.a.kind(), spec.a.min(), spec.a.max())?;
    let mut b = second_operand(rng, spec, &a)?;

    match spec.comparison {
        Comparison::Any => {},
        Comparison::FirstGreater => {
            if a.value < b.value {
                mem::swap(&mut a, &mut b);
            }
        },
        Comparison::FirstLess => {
            if a.value > b.value {
                mem::swap(&mut a, &mut b);
            }
        },
    }

    let result = spec.operator.apply(a.value, b.value)?;
    let prompt = format!("{} {} {}", a.display, spec.operator.symbol(), b.display);
    let key = format!(
        "{}|{}|{}|{}|{}",
        spec.operator.name(), a.value, b.value, spec.a.kind().name(), spec.b.kind().name(),
    );

    Ok(Question { a, b, operator: spec.operator, result, prompt, key })
}

/// Generate a batch of independent questions.
///
/// Each question is a fresh draw with no state shared between them, so a
/// batch may equally be produced by several workers with their own sources.
///
/// # Errors
///
/// The error of the first failing draw; earlier questions are discarded.
pub fn questions<R: Rng>(
    rng: &mut R,
    spec: &QuestionSpec,
    count: usize,
) -> Result<Vec<Question>, Generate> {
    (0..count).map(|_| question(rng, spec)).collect()
}

/// Draw the second operand, rejecting values the spec cannot use.
fn second_operand<R: Rng>(
    rng: &mut R,
    spec: &QuestionSpec,
    a: &Operand,
) -> Result<Operand, Generate> {
    let needs_distinct = spec.comparison != Comparison::Any;

    for _ in 0..RETRY_CAP {
        let candidate = operand(rng, spec.b.kind(), spec.b.min(), spec.b.max())?;

        if spec.operator == Operator::Divide && candidate.value.is_zero() {
            continue;
        }
        if needs_distinct && candidate.value == a.value {
            continue;
        }

        return Ok(candidate);
    }

    Err(Generate::ExhaustedRetries {
        subject: "second operand",
        cap: RETRY_CAP,
    })
}
