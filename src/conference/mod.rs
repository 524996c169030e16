//! Conference data access.
//!
//! [`ConferenceApi`] is the contract view-states depend on;
//! [`ConferenceRepository`] implements it over the GraphQL client and the
//! [`mapping`] functions.

mod api;
pub mod mapping;
mod repository;

pub use api::{ConferenceApi, SharedApi};
pub use repository::ConferenceRepository;
