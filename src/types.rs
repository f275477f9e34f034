//! Request-scoped value types shared by the evaluator, generator and server.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the hypotenuse `denom` is computed. Both forms are algebraically equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenomForm {
    /// sqrt(x² + (1 − x)²)
    #[default]
    SumOfSquares,
    /// sqrt(1 − 2x + 2x²)
    Expanded,
}

/// How the RUA is reported in a [`RatioSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleForm {
    /// `alpha_rad` and `alpha_deg`.
    #[default]
    Numeric,
    /// `alpha_expr`, e.g. `arctan(0.25/0.75)`.
    Symbolic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormulaVariant {
    pub denom: DenomForm,
    pub angle: AngleForm,
}

/// The six derived values for one x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub sinval: f64,
    pub cosval: f64,
    pub tanval: f64,
    pub secval: f64,
    pub csecval: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_rad: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_expr: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Value,
    Expression,
}

/// A step answer: a rounded number, an expression, or the blank token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Text(String),
}

impl Answer {
    /// Text form used when comparing against a submitted answer.
    pub fn as_text(&self) -> String {
        match self {
            Answer::Number(v) => v.to_string(),
            Answer::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemStep {
    pub step_id: String,
    pub prompt: String,
    pub answer_type: AnswerType,
    pub expression: String,
    pub correct_answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: Uuid,
    pub x: f64,
    pub steps: Vec<ProblemStep>,
}

/// Selector sent to the problem generator. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingResult {
    pub is_correct: bool,
    pub feedback: String,
}
