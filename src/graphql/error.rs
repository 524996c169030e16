//! Errors raised by the GraphQL client.

use thiserror::Error;

use crate::error::{ConferenceError, NetworkError};

/// Failure executing a GraphQL operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphQlError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(NetworkError),

    /// The endpoint answered with a non-2xx status.
    #[error("{operation} returned HTTP {status}: {message}")]
    Status {
        operation: String,
        status: u16,
        message: String,
    },

    /// The response carried GraphQL errors and no data.
    #[error("{} failed: {}", .operation, .messages.join("; "))]
    Server {
        operation: String,
        messages: Vec<String>,
    },

    /// The body was not a GraphQL response of the expected shape.
    #[error("{operation} response could not be decoded: {message}")]
    Decode { operation: String, message: String },
}

impl From<GraphQlError> for ConferenceError {
    fn from(err: GraphQlError) -> Self {
        match err {
            GraphQlError::Transport(network) => ConferenceError::Network(network),
            GraphQlError::Status {
                status, message, ..
            } => ConferenceError::Network(NetworkError::HttpStatus { status, message }),
            GraphQlError::Server {
                operation,
                messages,
            } => ConferenceError::GraphQl {
                operation,
                messages,
            },
            GraphQlError::Decode { operation, message } => {
                ConferenceError::Decode { operation, message }
            }
        }
    }
}
