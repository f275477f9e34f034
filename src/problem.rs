//! Practice problem generation.
//!
//! A problem samples x uniformly from [`PROBLEM_X_MIN`, `PROBLEM_X_MAX`],
//! rounds it to [`X_DECIMALS`] places and builds three fixed steps:
//! sin(α), cos(α), and α written as an arctangent of the leg ratio.
//! All randomness (x, the problem id, blanked answers) is drawn from the
//! caller's RNG, so a seeded generator reproduces a problem exactly.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::constants::*;
use crate::error::RuaResult;
use crate::ratios::{angle_expression, evaluate};
use crate::types::{Answer, AnswerType, Problem, ProblemRequest, ProblemStep};

/// Per-request RNG factory.
///
/// With a fixed seed, request i gets `SmallRng::seed_from_u64(seed + i)`;
/// otherwise each request is seeded from the OS.
#[derive(Debug, Default)]
pub struct RngSource {
    seed: Option<u64>,
    counter: AtomicU64,
}

impl RngSource {
    pub fn entropy() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            counter: AtomicU64::new(0),
        }
    }

    pub fn next_rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => {
                let i = self.counter.fetch_add(1, Ordering::Relaxed);
                SmallRng::seed_from_u64(seed.wrapping_add(i))
            }
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Draw x from the problem range, rounded to [`X_DECIMALS`] places.
pub fn sample_x<R: Rng>(rng: &mut R) -> f64 {
    round_to(
        rng.random_range(PROBLEM_X_MIN..=PROBLEM_X_MAX),
        X_DECIMALS,
    )
}

fn random_problem_id<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Build the three steps for `x` with rounded expected answers.
pub fn build_steps(x: f64) -> RuaResult<Vec<ProblemStep>> {
    let ratios = evaluate(x)?;
    let alpha_deg = ratios.tanval.atan().to_degrees();

    let steps = vec![
        ProblemStep {
            step_id: "step1".to_string(),
            prompt: format!(
                "For x = {x}, compute sin(α) = x / √(x² + (1 − x)²). \
                 Round to {ANSWER_DECIMALS} decimal places."
            ),
            answer_type: AnswerType::Value,
            expression: "x / sqrt(x^2 + (1 - x)^2)".to_string(),
            correct_answer: Answer::Number(round_to(ratios.sinval, ANSWER_DECIMALS)),
            context: Some(
                "The legs are x and 1 − x, so the hypotenuse is √(x² + (1 − x)²).".to_string(),
            ),
        },
        ProblemStep {
            step_id: "step2".to_string(),
            prompt: format!(
                "For x = {x}, compute cos(α) = (1 − x) / √(x² + (1 − x)²). \
                 Round to {ANSWER_DECIMALS} decimal places."
            ),
            answer_type: AnswerType::Value,
            expression: "(1 - x) / sqrt(x^2 + (1 - x)^2)".to_string(),
            correct_answer: Answer::Number(round_to(ratios.cosval, ANSWER_DECIMALS)),
            context: None,
        },
        ProblemStep {
            step_id: "step3".to_string(),
            prompt: format!(
                "For x = {x}, write the RUA α as an arctangent of the ratio of the legs."
            ),
            answer_type: AnswerType::Expression,
            expression: "arctan(x / (1 - x))".to_string(),
            correct_answer: Answer::Text(angle_expression(x)),
            context: Some(format!("α ≈ {alpha_deg:.2}°")),
        },
    ];
    debug_assert_eq!(steps.len(), STEPS_PER_PROBLEM);
    Ok(steps)
}

/// Generate a problem. In [`MISSING_STEPS_MODE`] each answer is
/// independently replaced by [`MISSING_ANSWER_TOKEN`] with probability 1/2.
pub fn generate_problem<R: Rng>(
    rng: &mut R,
    request: &ProblemRequest,
) -> RuaResult<Problem> {
    let problem_id = random_problem_id(rng);
    let x = sample_x(rng);
    let mut steps = build_steps(x)?;

    if request.mode.as_deref() == Some(MISSING_STEPS_MODE) {
        for step in steps.iter_mut() {
            if rng.random_bool(MISSING_ANSWER_PROBABILITY) {
                step.correct_answer = Answer::Text(MISSING_ANSWER_TOKEN.to_string());
            }
        }
    }

    Ok(Problem {
        problem_id,
        x,
        steps,
    })
}
