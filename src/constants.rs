//! Numeric bounds, rounding precisions and fixed strings.

/// Message returned for any x outside the open interval (0, 1).
pub const X_DOMAIN_MESSAGE: &str = "x must be in (0,1)";

/// Sampling range for generated problems (inclusive on both ends).
pub const PROBLEM_X_MIN: f64 = 0.2;
pub const PROBLEM_X_MAX: f64 = 0.8;

/// Decimal places kept for a sampled x.
pub const X_DECIMALS: i32 = 2;

/// Decimal places kept for precomputed step answers.
pub const ANSWER_DECIMALS: i32 = 4;

/// Number of steps in every generated problem.
pub const STEPS_PER_PROBLEM: usize = 3;

/// `mode` value that blanks out step answers.
pub const MISSING_STEPS_MODE: &str = "missing_steps";

/// Replacement for a blanked-out answer.
pub const MISSING_ANSWER_TOKEN: &str = "?";

/// Probability that a single step's answer is blanked in missing-steps mode.
pub const MISSING_ANSWER_PROBABILITY: f64 = 0.5;

pub const FEEDBACK_CORRECT: &str = "Correct!";
pub const FEEDBACK_INCORRECT: &str = "Incorrect. Try again.";

/// Default listening port when `RUA_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Round `value` to `decimals` places (half away from zero).
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
