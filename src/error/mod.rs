//! Error handling for the conference client.
//!
//! - **Network errors**: transport failures talking to the GraphQL endpoint
//! - **Conference errors**: the unified type every screen reports, covering
//!   network, GraphQL, decode and not-found failures
//! - **Result alias**: `ConferenceResult<T>`
//!
//! | Variant | Shown as | Retryable |
//! |---------|----------|-----------|
//! | Network | connection/timeout/status message | mostly |
//! | GraphQl | first server message | yes |
//! | Decode | invalid response | no |
//! | NotFound | "Session not found" / "Speaker not found" | no |
//!
//! The UI presents all of them the same way: an error state with a retry key.

mod conference_error;
mod network;
mod result;

pub use conference_error::{ConferenceError, Entity};
pub use network::{classify_http_error, NetworkError};
pub use result::ConferenceResult;
