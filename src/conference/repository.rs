//! GraphQL-backed implementation of [`ConferenceApi`].

use async_trait::async_trait;
use std::sync::Arc;

use super::api::{ConferenceApi, SharedApi};
use super::mapping;
use crate::adapters::ReqwestHttpClient;
use crate::error::ConferenceResult;
use crate::graphql::queries::{GetSessionDetails, GetSessions, GetSpeakerDetails, GetSpeakers};
use crate::graphql::{FetchPolicy, GraphQlClient, ResponseCache};
use crate::models::{Session, Speaker};
use crate::startup::AppConfig;
use crate::traits::{HttpClient, HttpError};

/// Runs the four conference queries and shapes their results.
///
/// Single-record lookups fetch the whole list and search it; the endpoint
/// exposes no keyed queries.
pub struct ConferenceRepository<C: HttpClient> {
    client: GraphQlClient<C>,
}

impl ConferenceRepository<ReqwestHttpClient> {
    /// Build the production repository from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        let client = GraphQlClient::new(config.endpoint.clone(), http)
            .with_cache(ResponseCache::new(config.cache_max_bytes));
        Ok(Self::new(client))
    }
}

impl<C: HttpClient + 'static> ConferenceRepository<C> {
    pub fn new(client: GraphQlClient<C>) -> Self {
        Self { client }
    }

    /// Wrap into the shared handle passed to view-states.
    pub fn into_shared(self) -> SharedApi {
        Arc::new(self)
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ConferenceApi for ConferenceRepository<C> {
    async fn list_sessions(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Session>> {
        let data = self.client.execute(&GetSessions, policy).await?;
        Ok(data
            .map(|d| d.sessions.into_iter().map(mapping::session_from_list).collect())
            .unwrap_or_default())
    }

    async fn get_session(
        &self,
        id: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Option<Session>> {
        let data = self.client.execute(&GetSessionDetails, policy).await?;
        Ok(data.and_then(|d| {
            d.sessions
                .into_iter()
                .find(|s| s.id == id)
                .map(mapping::session_from_details)
        }))
    }

    async fn list_speakers(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Speaker>> {
        let data = self.client.execute(&GetSpeakers, policy).await?;
        Ok(data
            .map(|d| d.speakers.into_iter().map(mapping::speaker_from_listing).collect())
            .unwrap_or_default())
    }

    async fn get_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Option<Speaker>> {
        let data = self.client.execute(&GetSpeakerDetails, policy).await?;
        Ok(data.and_then(|d| {
            d.speakers
                .into_iter()
                .find(|s| s.username == username)
                .map(mapping::speaker_from_details)
        }))
    }

    async fn sessions_for_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Vec<Session>> {
        let data = self.client.execute(&GetSessionDetails, policy).await?;
        Ok(data
            .map(|d| {
                d.sessions
                    .into_iter()
                    .filter(|s| s.speakers.iter().any(|sp| sp.username == username))
                    .map(mapping::session_from_details)
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::{ConferenceError, NetworkError};
    use crate::traits::HttpError;
    use serde_json::json;

    fn repository(mock: &MockHttpClient) -> ConferenceRepository<MockHttpClient> {
        ConferenceRepository::new(GraphQlClient::new("https://conf.test/graphql", mock.clone()))
    }

    fn session_details() -> serde_json::Value {
        json!({"data": {"sessions": [
            {"id": "s1", "title": "One", "speakers": [{"username": "ada", "name": "Ada"}]},
            {"id": "s2", "title": "Two", "speakers": []},
            {"id": "s3", "title": "Three", "speakers": [
                {"username": "grace", "name": "Grace"},
                {"username": "ada", "name": "Ada"}
            ]}
        ]}})
    }

    #[tokio::test]
    async fn test_sessions_for_speaker_filters() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(session_details()));

        let sessions = repository(&mock)
            .sessions_for_speaker("ada", FetchPolicy::NetworkOnly)
            .await
            .unwrap();
        let ids: Vec<_> = sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
        assert!(sessions.iter().all(|s| s.has_speaker("ada")));
    }

    #[tokio::test]
    async fn test_sessions_for_unknown_speaker_is_empty() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(session_details()));

        let sessions = repository(&mock)
            .sessions_for_speaker("nobody", FetchPolicy::NetworkOnly)
            .await
            .unwrap();
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_get_session_by_id() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(session_details()));
        let repo = repository(&mock);

        let found = repo.get_session("s3", FetchPolicy::CacheFirst).await.unwrap();
        assert_eq!(found.map(|s| s.id), Some("s3".to_string()));
        let missing = repo.get_session("s9", FetchPolicy::CacheFirst).await.unwrap();
        assert!(missing.is_none());
        // Second lookup was served from the response cache
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_null_data_yields_empty_results() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(json!({"data": null})));
        let repo = repository(&mock);

        assert!(repo.list_sessions(FetchPolicy::NetworkOnly).await.unwrap().is_empty());
        assert!(repo.list_speakers(FetchPolicy::NetworkOnly).await.unwrap().is_empty());
        assert!(repo
            .get_speaker("ada", FetchPolicy::NetworkOnly)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".into(),
        )));

        let err = repository(&mock)
            .list_sessions(FetchPolicy::NetworkOnly)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConferenceError::Network(NetworkError::ConnectionFailed { .. })
        ));
    }
}
