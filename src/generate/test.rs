use num::Zero;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::check::{self, Outcome};
use crate::data::elements::{Comparison, OperandKind, Operator};
use crate::data::rational::Rational;
use crate::error::{Generate, Invalid};
use crate::generate::{operand, question, questions, OperandSpec, QuestionSpec, RETRY_CAP};

const TRIALS: usize = 1_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn spec(
    operator: Operator,
    kind_a: OperandKind,
    kind_b: OperandKind,
    comparison: Comparison,
) -> QuestionSpec {
    QuestionSpec::new(
        operator,
        OperandSpec::new(kind_a, 1, 10).unwrap(),
        OperandSpec::new(kind_b, 1, 10).unwrap(),
        comparison,
    )
}

#[test]
fn positive_integer_in_range() {
    let mut rng = rng();

    for _ in 0..TRIALS {
        let operand = operand::<StdRng>(&mut rng, OperandKind::PositiveInteger, 3, 7).unwrap();
        assert!(operand.value >= Rational::from(3));
        assert!(operand.value <= Rational::from(7));
        assert_eq!(operand.display, operand.value.to_string());
    }
}

#[test]
fn negative_integer_is_negated_range() {
    let mut rng = rng();

    for _ in 0..TRIALS {
        let operand = operand::<StdRng>(&mut rng, OperandKind::NegativeInteger, 3, 7).unwrap();
        assert!(operand.value >= Rational::from(-7));
        assert!(operand.value <= Rational::from(-3));
    }
}

#[test]
fn proper_fraction_display_is_never_whole() {
    let mut rng = rng();

    for _ in 0..TRIALS {
        let operand = operand::<StdRng>(&mut rng, OperandKind::ProperFraction, 1, 10).unwrap();

        let mut parts = operand.display.split('/');
        let numerator: i64 = parts.next().unwrap().parse().unwrap();
        let denominator: i64 = parts.next().unwrap().parse().unwrap();
        assert!(parts.next().is_none());

        assert!((2..=10).contains(&denominator));
        assert!((1..=10).contains(&numerator));
        assert_ne!(numerator % denominator, 0, "\"{}\" reads as a whole number", operand.display);
    }
}

/// A single-value numerator range still has to avoid a whole-number display
/// as long as one denominator candidate works.
#[test]
fn proper_fraction_single_value_range() {
    let mut rng = rng();

    for _ in 0..TRIALS {
        // Numerator is always 6; denominators 2, 3 and 6 divide it, 4 and 5
        // remain usable.
        let operand = operand::<StdRng>(&mut rng, OperandKind::ProperFraction, 6, 6).unwrap();
        assert!(operand.display == "6/4" || operand.display == "6/5");
    }
}

#[test]
fn proper_fraction_exhaustion_is_an_error() {
    let mut rng = rng();

    // An upper bound of 0 leaves no denominator candidate, and the numerator
    // 0 would read as a whole number over any denominator anyway.
    let result = operand::<StdRng>(&mut rng, OperandKind::ProperFraction, 0, 0);
    assert_eq!(
        result,
        Err(Generate::ExhaustedRetries { subject: "proper fraction denominator", cap: RETRY_CAP }),
    );

    // An upper bound of 1 also leaves no denominator candidate.
    let result = operand::<StdRng>(&mut rng, OperandKind::ProperFraction, 1, 1);
    assert_eq!(
        result,
        Err(Generate::ExhaustedRetries { subject: "proper fraction denominator", cap: RETRY_CAP }),
    );
}

/// Construction is the only way to obtain a spec, so the generators only
/// ever see ranges that passed validation; the accessors hand them back.
#[test]
fn empty_range_is_rejected() {
    assert_eq!(
        OperandSpec::new(OperandKind::PositiveInteger, 5, 3),
        Err(Invalid::EmptyRange { min: 5, max: 3 }),
    );

    let spec = OperandSpec::new(OperandKind::ProperFraction, 2, 9).unwrap();
    assert_eq!(spec.kind(), OperandKind::ProperFraction);
    assert_eq!(spec.min(), 2);
    assert_eq!(spec.max(), 9);
}

#[test]
fn division_never_draws_a_zero_divisor() {
    let kinds = [
        OperandKind::PositiveInteger,
        OperandKind::NegativeInteger,
        OperandKind::ProperFraction,
    ];

    for &kind in &kinds {
        let mut rng = rng();
        // The range includes zero for the integer kinds, so rejection has
        // real work to do.
        let (min, max) = match kind {
            OperandKind::ProperFraction => (1, 10),
            _ => (0, 3),
        };
        let spec = QuestionSpec::new(
            Operator::Divide,
            OperandSpec::new(OperandKind::PositiveInteger, 1, 10).unwrap(),
            OperandSpec::new(kind, min, max).unwrap(),
            Comparison::Any,
        );

        for _ in 0..TRIALS {
            let question = question(&mut rng, &spec).unwrap();
            assert!(!question.b.value.is_zero());
            assert_eq!(
                question.result,
                question.a.value.checked_div(question.b.value).unwrap(),
            );
        }
    }
}

#[test]
fn first_greater_holds() {
    let mut rng = rng();
    let spec = spec(
        Operator::Difference,
        OperandKind::PositiveInteger,
        OperandKind::PositiveInteger,
        Comparison::FirstGreater,
    );

    for _ in 0..TRIALS {
        let question = question(&mut rng, &spec).unwrap();
        assert!(question.a.value > question.b.value, "{}", question.prompt);
    }
}

#[test]
fn first_less_holds() {
    let mut rng = rng();
    let spec = spec(
        Operator::Sum,
        OperandKind::PositiveInteger,
        OperandKind::ProperFraction,
        Comparison::FirstLess,
    );

    for _ in 0..TRIALS {
        let question = question(&mut rng, &spec).unwrap();
        assert!(question.a.value < question.b.value, "{}", question.prompt);
    }
}

/// Operands are swapped as value and display pairs, never mixed up.
#[test]
fn swap_keeps_value_and_display_together() {
    let mut rng = rng();
    let spec = spec(
        Operator::Sum,
        OperandKind::ProperFraction,
        OperandKind::ProperFraction,
        Comparison::FirstGreater,
    );

    for _ in 0..TRIALS {
        let question = question(&mut rng, &spec).unwrap();

        for operand in &[&question.a, &question.b] {
            let mut parts = operand.display.split('/');
            let numerator: i64 = parts.next().unwrap().parse().unwrap();
            let denominator: i64 = parts.next().unwrap().parse().unwrap();
            assert_eq!(Rational::new(numerator, denominator).unwrap(), operand.value);
        }
    }
}

#[test]
fn single_value_ranges_cannot_satisfy_a_strict_order() {
    let mut rng = rng();
    let spec = QuestionSpec::new(
        Operator::Sum,
        OperandSpec::new(OperandKind::PositiveInteger, 4, 4).unwrap(),
        OperandSpec::new(OperandKind::PositiveInteger, 4, 4).unwrap(),
        Comparison::FirstGreater,
    );

    assert_eq!(
        question(&mut rng, &spec),
        Err(Generate::ExhaustedRetries { subject: "second operand", cap: RETRY_CAP }),
    );
}

#[test]
fn sum_questions_end_to_end() {
    let mut rng = rng();
    let spec = spec(
        Operator::Sum,
        OperandKind::PositiveInteger,
        OperandKind::PositiveInteger,
        Comparison::Any,
    );

    for question in questions(&mut rng, &spec, 100).unwrap() {
        assert_eq!(question.result, question.a.value + question.b.value);
        assert_eq!(check::answer(&question, &question.result.to_string()), Outcome::Correct);
        assert_eq!(check::answer(&question, "abc"), Outcome::Unparseable);
    }
}

#[test]
fn prompt_and_key_format() {
    let mut rng = rng();
    let spec = spec(
        Operator::Multiply,
        OperandKind::PositiveInteger,
        OperandKind::ProperFraction,
        Comparison::Any,
    );

    let question = question(&mut rng, &spec).unwrap();

    assert_eq!(
        question.prompt,
        format!("{} × {}", question.a.display, question.b.display),
    );
    assert_eq!(
        question.key,
        format!(
            "Multiply|{}|{}|PositiveInteger|ProperFraction",
            question.a.value, question.b.value,
        ),
    );
}

#[test]
fn batches_are_reproducible_from_a_seed() {
    let spec = spec(
        Operator::Divide,
        OperandKind::ProperFraction,
        OperandKind::PositiveInteger,
        Comparison::Any,
    );

    let first = questions(&mut StdRng::seed_from_u64(7), &spec, 50).unwrap();
    let second = questions(&mut StdRng::seed_from_u64(7), &spec, 50).unwrap();
    assert_eq!(first, second);
}

#[test]
fn batch_has_requested_size_and_independent_questions() {
    let mut rng = rng();
    let spec = spec(
        Operator::Difference,
        OperandKind::NegativeInteger,
        OperandKind::PositiveInteger,
        Comparison::Any,
    );

    let batch = questions(&mut rng, &spec, 250).unwrap();
    assert_eq!(batch.len(), 250);

    for question in &batch {
        assert_eq!(question.result, question.a.value - question.b.value);
    }
}
