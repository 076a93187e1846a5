// --- File: crates/lokal_console/src/error.rs ---
use lokal_common::{validation_error, LokalError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// The backend call failed; carries the user-facing message.
    #[error("{0}")]
    Api(String),

    /// A required draft field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// No loaded record has this id.
    #[error("No {label} with id '{id}'")]
    NotFound { label: &'static str, id: String },

    /// `save` was called with no form open.
    #[error("Nothing to save")]
    NothingToSave,
}

/// Convert ConsoleError to LokalError
impl From<ConsoleError> for LokalError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Api(message) => LokalError::ApiError(message),
            err @ ConsoleError::MissingField(_) => validation_error(err),
            err @ ConsoleError::NotFound { .. } => validation_error(err),
            err @ ConsoleError::NothingToSave => validation_error(err),
        }
    }
}
