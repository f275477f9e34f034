//! # RUA — trigonometric ratio trainer
//!
//! Computes the six trigonometric ratios of the *Radical Unit Angle* (RUA)
//! for a scalar x ∈ (0, 1), generates three-step practice problems from
//! those ratios, and grades submitted answers.
//!
//! ## Geometry
//!
//! x and 1 − x are the legs of a right triangle, so the hypotenuse is
//! `denom = sqrt(x² + (1 − x)²)` and the RUA is α = arctan(x / (1 − x)).
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ratios`] | sin/cos/tan/sec/csc and α for one x, with formula variants |
//! | [`problem`] | Three-step problem generation from an injected RNG |
//! | [`grading`] | Trimmed string comparison of submitted answers |
//! | [`concept_map`] | Static prerequisite graph of the concepts involved |
//! | [`server`] | axum router exposing the above over HTTP |
//!
//! Every operation is a pure, request-scoped transformation. Nothing is
//! persisted and no mutable state is shared between requests.

pub mod concept_map;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod grading;
pub mod problem;
pub mod ratios;
pub mod server;
pub mod types;
