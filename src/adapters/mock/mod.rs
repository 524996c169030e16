//! Mock implementations for testing.
//!
//! Enables exercising the GraphQL client and repository without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
