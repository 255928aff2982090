//! Error types for trade valuation

use thiserror::Error;

/// Result type for valuation operations
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors that can occur while valuing players, picks, or trades
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Invalid attributes for player '{player}': {reason}")]
    InvalidAttributes { player: String, reason: String },

    #[error("Invalid draft pick {pick}: {reason}")]
    InvalidPick { pick: String, reason: String },

    #[error("Unresolved pick reference: '{0}'")]
    UnresolvedReference(String),

    #[error("Invalid league settings: {0}")]
    InvalidSettings(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl ValuationError {
    pub(crate) fn invalid_attributes(player: impl Into<String>, reason: impl Into<String>) -> Self {
        ValuationError::InvalidAttributes { player: player.into(), reason: reason.into() }
    }

    pub(crate) fn invalid_pick(pick: impl ToString, reason: impl Into<String>) -> Self {
        ValuationError::InvalidPick { pick: pick.to_string(), reason: reason.into() }
    }

    /// Whether the evaluator may substitute a default value and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ValuationError::InvalidAttributes { .. }
                | ValuationError::InvalidPick { .. }
                | ValuationError::UnresolvedReference(_)
                | ValuationError::InvalidSettings(_)
        )
    }
}
