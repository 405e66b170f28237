//! Core error types.

use crate::validate::Invariant;
use thiserror::Error;

/// Errors from the automaton model, its ingestion and conversion.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invalid format: {reason}")]
    InvalidFormat { reason: String },

    #[error("state name '{name}' maps to index {index}, which has no single-letter name")]
    OutOfRange { name: String, index: u32 },

    #[error("inconsistent automaton: {invariant}{}", entity_suffix(.entity))]
    InconsistentAutomaton {
        invariant: Invariant,
        entity: Option<String>,
    },

    #[error("malformed {format} input: {reason}")]
    Malformed { format: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn entity_suffix(entity: &Option<String>) -> String {
    match entity {
        Some(id) => format!(" ('{}')", id),
        None => String::new(),
    }
}

impl CoreError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(invariant: Invariant, entity: Option<&str>) -> Self {
        CoreError::InconsistentAutomaton {
            invariant,
            entity: entity.map(str::to_string),
        }
    }

    /// Creates a decoding error for the named input format.
    pub fn malformed(format: &'static str, reason: impl Into<String>) -> Self {
        CoreError::Malformed {
            format,
            reason: reason.into(),
        }
    }

    /// Returns a stable error code, suitable for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CoreError::InvalidFormat { .. } => "INVALID_FORMAT",
            CoreError::OutOfRange { .. } => "OUT_OF_RANGE",
            CoreError::InconsistentAutomaton { .. } => "INCONSISTENT_AUTOMATON",
            CoreError::Malformed { .. } => "MALFORMED_INPUT",
            CoreError::Io(_) => "IO_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_message_names_entity() {
        let err = CoreError::inconsistent(Invariant::FinalStateKnown, Some("C"));
        assert_eq!(
            err.to_string(),
            "inconsistent automaton: final state is not in the state set ('C')"
        );
        assert_eq!(err.error_code(), "INCONSISTENT_AUTOMATON");
    }

    #[test]
    fn test_inconsistent_message_without_entity() {
        let err = CoreError::inconsistent(Invariant::StartStateSet, None);
        assert_eq!(err.to_string(), "inconsistent automaton: start state is not set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert_eq!(err.error_code(), "IO_FAILURE");
    }
}
