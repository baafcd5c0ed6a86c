//! # Answer checking
//!
//! Judging free-form submitted text against a question's exact result.
use std::str::FromStr;

use crate::data::rational::Rational;
use crate::generate::Question;

/// Verdict on a submitted answer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// The text could not be read as a number. The session layer should
    /// re-prompt without counting an attempt.
    Unparseable,
}

/// Judge a submitted answer against a question's exact result.
///
/// The submission is parsed with [`Rational::from_str`] and compared by exact
/// rational equality: `"1/2"`, `"2/4"` and `"0.5"` are all correct answers to
/// a question whose result is one half. Floating point never enters the
/// comparison.
pub fn answer(question: &Question, raw: &str) -> Outcome {
    match Rational::from_str(raw) {
        Ok(value) if value == question.result => Outcome::Correct,
        Ok(_) => Outcome::Incorrect,
        Err(_) => Outcome::Unparseable,
    }
}

#[cfg(test)]
mod test;
