//! Unified error type for conference data access.
//!
//! Every failure a screen can show passes through [`ConferenceError`], which
//! gives a uniform user message, error code and retry classification.

use std::fmt;

use super::network::NetworkError;

/// The kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Session,
    Speaker,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Session => write!(f, "Session"),
            Entity::Speaker => write!(f, "Speaker"),
        }
    }
}

/// Errors surfaced to the view-state layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConferenceError {
    /// Transport-level failure.
    Network(NetworkError),

    /// The server answered with GraphQL errors and no usable data.
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },

    /// The response body did not match the expected shape.
    Decode { operation: String, message: String },

    /// A lookup succeeded but no record carried the requested key.
    NotFound { entity: Entity, key: String },
}

impl ConferenceError {
    /// Build a not-found error for `entity` keyed by `key`.
    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        ConferenceError::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Check if a retry has any chance of a different outcome.
    pub fn is_retryable(&self) -> bool {
        match self {
            ConferenceError::Network(err) => err.is_retryable(),
            ConferenceError::GraphQl { .. } => true,
            ConferenceError::Decode { .. } => false,
            ConferenceError::NotFound { .. } => false,
        }
    }

    /// Message shown in a screen's error state.
    pub fn user_message(&self) -> String {
        match self {
            ConferenceError::Network(err) => err.user_message(),
            ConferenceError::GraphQl { messages, .. } => match messages.first() {
                Some(first) => first.clone(),
                None => "The server reported an error.".to_string(),
            },
            ConferenceError::Decode { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            ConferenceError::NotFound { entity, .. } => format!("{} not found", entity),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConferenceError::Network(err) => err.error_code(),
            ConferenceError::GraphQl { .. } => "E_GQL",
            ConferenceError::Decode { .. } => "E_DECODE",
            ConferenceError::NotFound { .. } => "E_NOT_FOUND",
        }
    }
}

impl fmt::Display for ConferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConferenceError::Network(err) => write!(f, "{}", err),
            ConferenceError::GraphQl {
                operation,
                messages,
            } => write!(f, "{} failed: {}", operation, messages.join("; ")),
            ConferenceError::Decode { operation, message } => {
                write!(f, "{} returned an unexpected shape: {}", operation, message)
            }
            ConferenceError::NotFound { entity, key } => {
                write!(f, "{} '{}' not found", entity, key)
            }
        }
    }
}

impl std::error::Error for ConferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConferenceError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NetworkError> for ConferenceError {
    fn from(err: NetworkError) -> Self {
        ConferenceError::Network(err)
    }
}
