//! Result type alias for conference operations.

use super::conference_error::ConferenceError;

/// Type alias for Results using ConferenceError.
///
/// # Example
///
/// ```ignore
/// use graphqlconf::error::ConferenceResult;
///
/// async fn titles(api: &dyn ConferenceApi) -> ConferenceResult<Vec<String>> {
///     let sessions = api.list_sessions(FetchPolicy::CacheFirst).await?;
///     Ok(sessions.into_iter().map(|s| s.title).collect())
/// }
/// ```
pub type ConferenceResult<T> = Result<T, ConferenceError>;
