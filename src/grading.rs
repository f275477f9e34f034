//! Answer grading: trimmed string equality, fixed feedback.

use crate::constants::{FEEDBACK_CORRECT, FEEDBACK_INCORRECT};
use crate::types::GradingResult;

/// Compare a submitted answer with the expected one after trimming both.
pub fn grade(user_response: &str, correct_answer: &str) -> GradingResult {
    let is_correct = user_response.trim() == correct_answer.trim();
    GradingResult {
        is_correct,
        feedback: if is_correct {
            FEEDBACK_CORRECT
        } else {
            FEEDBACK_INCORRECT
        }
        .to_string(),
    }
}
