use crate::check::{answer, Outcome};
use crate::data::elements::Operator;
use crate::data::rational::Rational;
use crate::generate::{Operand, Question};

/// `2/4 + 0` as a learner would see it; the stored result is the canonical
/// `1/2`.
fn half_question() -> Question {
    let a = Operand {
        value: Rational::new(1, 2).unwrap(),
        display: "2/4".to_string(),
    };
    let b = Operand {
        value: Rational::from(0),
        display: "0".to_string(),
    };

    Question {
        result: a.value + b.value,
        prompt: format!("{} + {}", a.display, b.display),
        key: "Sum|1/2|0|ProperFraction|PositiveInteger".to_string(),
        a,
        b,
        operator: Operator::Sum,
    }
}

#[test]
fn equivalent_forms_are_all_correct() {
    let question = half_question();

    for text in &["1/2", "2/4", "3/6", "0.5", " 1/2 "] {
        assert_eq!(answer(&question, text), Outcome::Correct, "\"{}\"", text);
    }
}

#[test]
fn wrong_values_are_incorrect() {
    let question = half_question();

    for text in &["1/3", "2", "-1/2", "0.4"] {
        assert_eq!(answer(&question, text), Outcome::Incorrect, "\"{}\"", text);
    }
}

#[test]
fn unreadable_text_is_unparseable() {
    let question = half_question();

    for text in &[
        "", "   ", "abc", "1/2/3", "3/0", "un demi",
        // Extreme magnitudes must be recovered as unparseable, not crash the
        // session.
        "1000000000000000000.1", "10000000000000000000.0", "1/-9223372036854775808",
    ] {
        assert_eq!(answer(&question, text), Outcome::Unparseable, "\"{}\"", text);
    }
}
