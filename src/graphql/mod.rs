//! GraphQL client for the conference endpoint.
//!
//! - [`GraphQlClient`] - executes named operations over an [`crate::traits::HttpClient`]
//! - [`ResponseCache`] / [`FetchPolicy`] - in-memory payload cache
//! - [`queries`] - the four fixed operations and their typed responses

mod cache;
mod client;
mod error;
pub mod queries;

pub use cache::{FetchPolicy, ResponseCache, DEFAULT_CACHE_MAX_BYTES};
pub use client::{GraphQlClient, DEFAULT_ENDPOINT};
pub use error::GraphQlError;
pub use queries::Operation;
