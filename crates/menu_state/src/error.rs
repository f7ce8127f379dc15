//! Error types for menu state

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A component was used without a structurally required ancestor
    #[error("{component} must be used within {provider}")]
    MissingContext {
        component: &'static str,
        provider: &'static str,
    },

    #[error("Unknown accessibility action: {0}")]
    UnknownAccessibilityAction(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
