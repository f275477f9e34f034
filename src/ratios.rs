//! RUA ratio evaluation: sin, cos, tan, sec, csc and α for one x.
//!
//! The legs of the right triangle are x and 1 − x, so every ratio is a closed
//! form in x. The open-interval check keeps both legs strictly positive, which
//! is what keeps tan/sec (divide by 1 − x) and csc (divide by x) finite.

use crate::constants::round_to;
use crate::error::{RuaError, RuaResult};
use crate::types::{AngleForm, DenomForm, FormulaVariant, RatioSet};

/// Reject any x not strictly inside (0, 1). NaN fails both comparisons.
#[inline]
pub fn check_domain(x: f64) -> RuaResult<f64> {
    if x > 0.0 && x < 1.0 {
        Ok(x)
    } else {
        Err(RuaError::OutOfDomain(x))
    }
}

/// Hypotenuse length for legs x and 1 − x.
#[inline]
pub fn denominator(x: f64, form: DenomForm) -> f64 {
    match form {
        DenomForm::SumOfSquares => (x * x + (1.0 - x) * (1.0 - x)).sqrt(),
        DenomForm::Expanded => (1.0 - 2.0 * x + 2.0 * x * x).sqrt(),
    }
}

/// Symbolic RUA with x substituted, e.g. `arctan(0.25/0.75)`.
pub fn angle_expression(x: f64) -> String {
    // 1 - x picks up representation noise (1 - 0.9 = 0.09999999999999998)
    format!("arctan({}/{})", x, round_to(1.0 - x, 12))
}

/// Evaluate all ratios for `x` using the default (canonical) variant.
pub fn evaluate(x: f64) -> RuaResult<RatioSet> {
    evaluate_with(x, FormulaVariant::default())
}

/// Evaluate all ratios for `x` using the given formula variant.
pub fn evaluate_with(x: f64, variant: FormulaVariant) -> RuaResult<RatioSet> {
    let x = check_domain(x)?;
    let denom = denominator(x, variant.denom);
    let tanval = x / (1.0 - x);

    let mut set = RatioSet {
        sinval: x / denom,
        cosval: (1.0 - x) / denom,
        tanval,
        secval: denom / (1.0 - x),
        csecval: denom / x,
        alpha_rad: None,
        alpha_deg: None,
        alpha_expr: None,
    };

    match variant.angle {
        AngleForm::Numeric => {
            let alpha = tanval.atan();
            set.alpha_rad = Some(alpha);
            set.alpha_deg = Some(alpha.to_degrees());
        }
        AngleForm::Symbolic => {
            set.alpha_expr = Some(angle_expression(x));
        }
    }

    // Subnormal x passes the interval check but csc = denom / x overflows.
    let finite = [set.sinval, set.cosval, set.tanval, set.secval, set.csecval]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(RuaError::OutOfDomain(x));
    }

    Ok(set)
}
