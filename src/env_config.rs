//! Environment configuration for the RUA server.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `RUA_PORT` | 8000 | Listening port |
//! | `RUA_DENOM_FORM` | `sum_of_squares` | `sum_of_squares` or `expanded` |
//! | `RUA_ANGLE_FORM` | `numeric` | `numeric` or `symbolic` |
//! | `RUA_SEED` | unset | Fixed RNG seed for reproducible problems |
//! | `RUST_LOG` | `info` | tracing filter |

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::DEFAULT_PORT;
use crate::error::{RuaError, RuaResult};
use crate::types::{AngleForm, DenomForm, FormulaVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    pub port: u16,
    pub variant: FormulaVariant,
    pub seed: Option<u64>,
}

impl ServiceConfig {
    /// Read all settings from the process environment.
    pub fn from_env() -> RuaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, so tests need not touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> RuaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("RUA_PORT") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| RuaError::InvalidConfig(format!("RUA_PORT={s}")))?,
            None => DEFAULT_PORT,
        };

        let denom = match lookup("RUA_DENOM_FORM").as_deref().map(str::trim) {
            None | Some("") | Some("sum_of_squares") => DenomForm::SumOfSquares,
            Some("expanded") => DenomForm::Expanded,
            Some(other) => {
                return Err(RuaError::InvalidConfig(format!("RUA_DENOM_FORM={other}")))
            }
        };

        let angle = match lookup("RUA_ANGLE_FORM").as_deref().map(str::trim) {
            None | Some("") | Some("numeric") => AngleForm::Numeric,
            Some("symbolic") => AngleForm::Symbolic,
            Some(other) => {
                return Err(RuaError::InvalidConfig(format!("RUA_ANGLE_FORM={other}")))
            }
        };

        let seed = match lookup("RUA_SEED") {
            Some(s) if !s.trim().is_empty() => Some(
                s.trim()
                    .parse()
                    .map_err(|_| RuaError::InvalidConfig(format!("RUA_SEED={s}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            port,
            variant: FormulaVariant { denom, angle },
            seed,
        })
    }
}

/// Install the global tracing subscriber (stderr, `RUST_LOG` or `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
