use thiserror::Error;

use crate::constants::X_DOMAIN_MESSAGE;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuaError {
    /// x fell outside the open interval (0, 1).
    #[error("{}", X_DOMAIN_MESSAGE)]
    OutOfDomain(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for consistent error handling across the crate
pub type RuaResult<T> = Result<T, RuaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_message_is_fixed() {
        assert_eq!(RuaError::OutOfDomain(1.5).to_string(), "x must be in (0,1)");
        assert_eq!(RuaError::OutOfDomain(-0.1).to_string(), "x must be in (0,1)");
    }
}
