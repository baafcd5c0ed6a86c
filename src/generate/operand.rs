//! # Operand generation
use rand::Rng;

use crate::data::elements::OperandKind;
use crate::data::rational::Rational;
use crate::error::Generate;
use crate::generate::RETRY_CAP;

/// Largest denominator a proper fraction operand is drawn with.
const DENOMINATOR_LIMIT: i64 = 10;

/// A drawn operand: the exact value and the text shown to the learner.
///
/// The two are kept separately because a proper fraction is shown unreduced
/// (`"4/6"`) while its value is stored in lowest terms (`2/3`). Correctness
/// checking always goes through the value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operand {
    pub value: Rational,
    pub display: String,
}

impl Operand {
    fn integer(value: i64) -> Self {
        Self {
            value: Rational::from(value),
            display: value.to_string(),
        }
    }
}

/// Draw a single operand of the requested kind.
///
/// # Arguments
///
/// * `rng`: Random source, owned by the caller.
/// * `kind`: Category of number to draw.
/// * `min`, `max`: Inclusive range of the draw, `min <= max` (validated when
///   the spec is built, not here). For `NegativeInteger` the range describes
///   the magnitude; for `ProperFraction` it bounds the numerator.
///
/// # Errors
///
/// `ExhaustedRetries` when a proper fraction is requested but every candidate
/// denominator would make the display read as a whole number.
pub fn operand<R: Rng>(
    rng: &mut R,
    kind: OperandKind,
    min: i64,
    max: i64,
) -> Result<Operand, Generate> {
    match kind {
        OperandKind::PositiveInteger => Ok(Operand::integer(rng.gen_range(min..=max))),
        OperandKind::NegativeInteger => Ok(Operand::integer(-rng.gen_range(min..=max))),
        OperandKind::ProperFraction => proper_fraction(rng, min, max),
    }
}

/// Draw a fraction whose display is never integer-valued.
///
/// The denominator comes from `[2, min(max, 10)]` and the numerator from
/// `[min, max]`. When the numerator is an exact multiple of the denominator,
/// the denominator is redrawn; after `RETRY_CAP` failed draws the candidates
/// are scanned in order, so the loop only fails when no candidate exists at
/// all (for example a numerator of zero, which every denominator divides).
fn proper_fraction<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<Operand, Generate> {
    let highest_denominator = max.min(DENOMINATOR_LIMIT);
    let numerator = rng.gen_range(min..=max);

    if highest_denominator >= 2 {
        for _ in 0..RETRY_CAP {
            let denominator = rng.gen_range(2..=highest_denominator);
            if numerator % denominator != 0 {
                return unreduced(numerator, denominator);
            }
        }

        for denominator in 2..=highest_denominator {
            if numerator % denominator != 0 {
                return unreduced(numerator, denominator);
            }
        }
    }

    Err(Generate::ExhaustedRetries {
        subject: "proper fraction denominator",
        cap: RETRY_CAP,
    })
}

fn unreduced(numerator: i64, denominator: i64) -> Result<Operand, Generate> {
    Ok(Operand {
        value: Rational::new(numerator, denominator)?,
        display: format!("{}/{}", numerator, denominator),
    })
}
