//! Property-based tests for ratio evaluation and problem generation.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use rua::constants::*;
use rua::error::RuaError;
use rua::grading::grade;
use rua::problem::generate_problem;
use rua::ratios::{denominator, evaluate, evaluate_with};
use rua::types::{DenomForm, FormulaVariant, ProblemRequest};

/// Strategy: x strictly inside (0, 1), away from the poles.
fn x_strategy() -> impl Strategy<Value = f64> {
    1e-6..(1.0 - 1e-6)
}

/// Strategy: positive x down through the subnormal range.
fn tiny_x_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (1u64..(1u64 << 52)).prop_map(f64::from_bits),
        f64::MIN_POSITIVE..1e-300,
    ]
}

proptest! {
    // 1. sin² + cos² = 1
    #[test]
    fn pythagorean_identity(x in x_strategy()) {
        let r = evaluate(x).unwrap();
        let sum = r.sinval * r.sinval + r.cosval * r.cosval;
        prop_assert!((sum - 1.0).abs() < 1e-12, "x={x} sum={sum}");
    }

    // 2. tan = sin / cos
    #[test]
    fn tan_is_sin_over_cos(x in x_strategy()) {
        let r = evaluate(x).unwrap();
        let ratio = r.sinval / r.cosval;
        prop_assert!((r.tanval - ratio).abs() <= 1e-9 * r.tanval.max(1.0), "x={x}");
    }

    // 3. Anything outside (0, 1) is rejected
    #[test]
    fn out_of_domain_rejected(x in prop_oneof![-1e6..=0.0f64, 1.0..1e6f64]) {
        prop_assert_eq!(evaluate(x), Err(RuaError::OutOfDomain(x)));
    }

    // 4. Both denominator forms agree
    #[test]
    fn denominator_forms_agree(x in x_strategy()) {
        let a = denominator(x, DenomForm::SumOfSquares);
        let b = denominator(x, DenomForm::Expanded);
        prop_assert!((a - b).abs() < 1e-12, "x={x}");

        let expanded = FormulaVariant { denom: DenomForm::Expanded, ..Default::default() };
        let r1 = evaluate(x).unwrap();
        let r2 = evaluate_with(x, expanded).unwrap();
        prop_assert!((r1.sinval - r2.sinval).abs() < 1e-9);
        prop_assert!((r1.secval - r2.secval).abs() <= 1e-9 * r1.secval);
    }

    // 5. α lies in (0°, 90°)
    #[test]
    fn angle_in_first_quadrant(x in x_strategy()) {
        let deg = evaluate(x).unwrap().alpha_deg.unwrap();
        prop_assert!(deg > 0.0 && deg < 90.0, "x={x} deg={deg}");
    }

    // 5b. Tiny x either evaluates to finite ratios or is rejected
    #[test]
    fn tiny_x_finite_or_rejected(x in tiny_x_strategy()) {
        match evaluate(x) {
            Ok(r) => {
                for v in [r.sinval, r.cosval, r.tanval, r.secval, r.csecval] {
                    prop_assert!(v.is_finite(), "x={x:e}");
                }
            }
            Err(e) => prop_assert_eq!(e, RuaError::OutOfDomain(x)),
        }
    }

    // 6. Every generated problem has 3 steps and x in range
    #[test]
    fn problem_shape(seed in any::<u64>(), missing in any::<bool>()) {
        let req = ProblemRequest {
            mode: missing.then(|| MISSING_STEPS_MODE.to_string()),
            ..Default::default()
        };
        let p = generate_problem(&mut SmallRng::seed_from_u64(seed), &req).unwrap();
        prop_assert_eq!(p.steps.len(), STEPS_PER_PROBLEM);
        prop_assert!(p.x >= PROBLEM_X_MIN && p.x <= PROBLEM_X_MAX, "x={}", p.x);
    }

    // 7. Grading ignores surrounding whitespace
    #[test]
    fn grading_trims(answer in "[0-9a-z./()]{1,12}", pad_l in " {0,3}", pad_r in "[ \t]{0,3}") {
        let padded = format!("{pad_l}{answer}{pad_r}");
        prop_assert!(grade(&padded, &answer).is_correct);
    }
}
