//! Axum HTTP server: stateless endpoints for the RUA trainer frontend.
//!
//! Handlers hold no mutable state. The shared [`AppContext`] carries the
//! formula variant and the per-request RNG factory.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/evaluate` | All ratios and α for one x |
//! | POST | `/generate-problem` | Three-step practice problem |
//! | POST | `/evaluate-problem` | Grade one submitted step answer |
//! | GET | `/concept-map` | Static prerequisite graph |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::concept_map::{concept_map, ConceptMap};
use crate::env_config::ServiceConfig;
use crate::error::RuaError;
use crate::grading::grade;
use crate::problem::{generate_problem, RngSource};
use crate::ratios::evaluate_with;
use crate::types::{Answer, FormulaVariant, GradingResult, Problem, ProblemRequest, RatioSet};

#[derive(Debug, Default)]
pub struct AppContext {
    pub variant: FormulaVariant,
    pub rng: RngSource,
}

impl AppContext {
    pub fn new(variant: FormulaVariant, rng: RngSource) -> Self {
        Self { variant, rng }
    }

    pub fn from_config(cfg: &ServiceConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::entropy(),
        };
        Self::new(cfg.variant, rng)
    }
}

pub type AppState = Arc<AppContext>;

pub fn create_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/evaluate", post(handle_evaluate))
        .route("/generate-problem", post(handle_generate_problem))
        .route("/evaluate-problem", post(handle_evaluate_problem))
        .route("/concept-map", get(handle_get_concept_map))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ctx)
}

// ── Request/Response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct EvaluateRequest {
    x: f64,
}

#[derive(Deserialize)]
struct EvaluateProblemRequest {
    #[serde(default)]
    step_id: Option<String>,
    user_response: Answer,
    correct_answer: Answer,
}

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn error_response(status: StatusCode, msg: &str) -> ErrorResponse {
    (status, Json(serde_json::json!({ "detail": msg })))
}

fn rejection_response(rejection: JsonRejection) -> ErrorResponse {
    error_response(rejection.status(), &rejection.body_text())
}

impl From<RuaError> for ErrorResponse {
    fn from(err: RuaError) -> Self {
        let status = match err {
            RuaError::OutOfDomain(_) => StatusCode::BAD_REQUEST,
            RuaError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, &err.to_string())
    }
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_concept_map() -> Json<ConceptMap> {
    Json(concept_map())
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_evaluate(
    State(ctx): State<AppState>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<RatioSet>, ErrorResponse> {
    let Json(req) = body.map_err(rejection_response)?;
    match evaluate_with(req.x, ctx.variant) {
        Ok(set) => Ok(Json(set)),
        Err(err) => {
            tracing::debug!(x = req.x, "rejected out-of-domain x");
            Err(err.into())
        }
    }
}

async fn handle_generate_problem(
    State(ctx): State<AppState>,
    body: Result<Json<ProblemRequest>, JsonRejection>,
) -> Result<Json<Problem>, ErrorResponse> {
    let Json(req) = body.map_err(rejection_response)?;
    let mut rng = ctx.rng.next_rng();
    let problem = generate_problem(&mut rng, &req)?;
    tracing::info!(
        problem_id = %problem.problem_id,
        x = problem.x,
        topic = req.topic.as_deref().unwrap_or("-"),
        difficulty = req.difficulty.as_deref().unwrap_or("-"),
        mode = req.mode.as_deref().unwrap_or("-"),
        "generated problem"
    );
    Ok(Json(problem))
}

async fn handle_evaluate_problem(
    body: Result<Json<EvaluateProblemRequest>, JsonRejection>,
) -> Result<Json<GradingResult>, ErrorResponse> {
    let Json(req) = body.map_err(rejection_response)?;
    let result = grade(&req.user_response.as_text(), &req.correct_answer.as_text());
    tracing::debug!(
        step_id = req.step_id.as_deref().unwrap_or("-"),
        is_correct = result.is_correct,
        "graded step"
    );
    Ok(Json(result))
}
