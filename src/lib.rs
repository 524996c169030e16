//! graphqlconf - a terminal client for the GraphQL conference schedule.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod conference;
pub mod error;
pub mod graphql;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
