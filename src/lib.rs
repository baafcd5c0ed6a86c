//! # rexd
//!
//! Rust Exact arithmetic Drill: the engine behind a timed arithmetic practice
//! tool. A question pairs two randomly drawn operands (integers or fractions)
//! with one of four operators; submitted answers are judged by exact rational
//! equality, never by floating point approximation, so `1/2` is a correct
//! answer wherever `2/4` is.
//!
//! The session layer (timing, score keeping, persistence of mistakes) lives
//! outside this crate. It consumes [`generate::questions`] for a batch of
//! practice questions, presents each [`generate::Question`]'s prompt, judges
//! submissions with [`check::answer`], and round-trips values through the
//! parse/display pair of [`data::rational::Rational`]. A question's `key` is
//! the stable handle such a layer stores to correlate a later review attempt
//! with the original mistake.
pub mod check;
pub mod data;
pub mod error;
pub mod generate;
