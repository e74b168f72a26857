// Typed failure kinds the engine surfaces to its callers. The caller maps
// these to user-facing messages; the engine itself never logs and never
// partially applies a mutation on failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An overs value (or other formatted field) could not be parsed.
    #[error("invalid overs value `{value}`: {reason}")]
    InvalidFormat { value: String, reason: String },

    /// A team identifier resolved against neither an id nor a name.
    #[error("team `{0}` not found in table")]
    TeamNotFound(String),

    /// A numeric parameter was out of range or internally inconsistent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub(crate) fn invalid_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
