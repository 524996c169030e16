//! AppMessage enum for async communication within the application.

use crate::view_state::{ViewId, ViewOutcome};

/// Messages posted to the main loop by background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A view's fetch finished
    ViewLoaded {
        view_id: ViewId,
        generation: u64,
        outcome: ViewOutcome,
    },
}
