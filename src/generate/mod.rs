//! # Question generation
//!
//! Drawing random operands and composing them into self-contained practice
//! questions. All randomness flows through a caller-supplied [`rand::Rng`],
//! so batches are reproducible from a seed and workers generating in parallel
//! each own their source.
pub use operand::{operand, Operand};
pub use question::{question, questions, OperandSpec, Question, QuestionSpec};

mod operand;
mod question;

/// Attempts per bounded rejection sampling loop before giving up.
///
/// Sampling rejects zero divisors, whole-number proper fraction displays and
/// tied operands under an ordering constraint. All are rare under sensible
/// ranges, so exhausting this cap indicates a degenerate configuration.
pub const RETRY_CAP: u32 = 64;

#[cfg(test)]
mod test;
