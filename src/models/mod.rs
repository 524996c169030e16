//! Domain records shared by every screen.
//!
//! Both records are immutable values rebuilt from each query response.

mod session;
mod speaker;

pub use session::Session;
pub use speaker::{Speaker, SpeakerDetail, SpeakerField};
