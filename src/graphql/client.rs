//! GraphQL-over-HTTP client bound to a single endpoint.

use serde::Deserialize;
use std::sync::Mutex;
use std::time::Instant;

use super::cache::{FetchPolicy, ResponseCache};
use super::error::GraphQlError;
use super::queries::Operation;
use crate::error::classify_http_error;
use crate::traits::{Headers, HttpClient, Response};

/// Public conference endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://graphqlconf.app/graphql";

/// Longest slice of a failing body kept in error messages.
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

/// Executes named operations against one endpoint and caches their payloads.
///
/// The cache lock is only held for lookups and inserts, never across a
/// network call, so concurrent screens never wait on each other.
pub struct GraphQlClient<C: HttpClient> {
    endpoint: String,
    http: C,
    cache: Mutex<ResponseCache>,
}

impl<C: HttpClient> GraphQlClient<C> {
    /// Create a client for `endpoint` with the default cache budget.
    pub fn new(endpoint: impl Into<String>, http: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
            cache: Mutex::new(ResponseCache::default()),
        }
    }

    /// Replace the response cache.
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Mutex::new(cache);
        self
    }

    /// Cache statistics (hits, misses).
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.lock().map(|c| c.stats()).unwrap_or((0, 0))
    }

    /// Execute `operation`.
    ///
    /// Returns `Ok(None)` when the server answers with `data: null` and no
    /// errors. GraphQL errors alongside usable data are logged and ignored.
    pub async fn execute<O: Operation + Sync>(
        &self,
        operation: &O,
        policy: FetchPolicy,
    ) -> Result<Option<O::Data>, GraphQlError> {
        let variables = operation.variables();
        let key = ResponseCache::key(O::NAME, &variables);

        if policy == FetchPolicy::CacheFirst {
            if let Some(data) = self.cached::<O>(&key) {
                return Ok(Some(data));
            }
        }

        let body = serde_json::json!({
            "query": O::DOCUMENT,
            "operationName": O::NAME,
            "variables": variables,
        })
        .to_string();

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let started = Instant::now();
        let response = self
            .http
            .post(&self.endpoint, &body, &headers)
            .await
            .map_err(|e| {
                GraphQlError::Transport(classify_http_error(e, &self.endpoint, O::NAME))
            })?;

        let payload = Self::data_payload(O::NAME, &response)?;
        tracing::info!(
            operation = O::NAME,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "graphql operation completed"
        );

        let Some(payload) = payload else {
            return Ok(None);
        };

        let data: O::Data =
            serde_json::from_value(payload.clone()).map_err(|e| GraphQlError::Decode {
                operation: O::NAME.to_string(),
                message: e.to_string(),
            })?;

        if let Ok(bytes) = serde_json::to_vec(&payload) {
            if let Ok(mut cache) = self.cache.lock() {
                cache.insert(key, bytes.into());
            }
        }

        Ok(Some(data))
    }

    /// Decode a cached payload, discarding it if it no longer fits the type.
    fn cached<O: Operation>(&self, key: &str) -> Option<O::Data> {
        let mut cache = self.cache.lock().ok()?;
        let bytes = cache.get(key)?;
        match serde_json::from_slice::<O::Data>(&bytes) {
            Ok(data) => {
                tracing::debug!(operation = O::NAME, "served from response cache");
                Some(data)
            }
            Err(e) => {
                tracing::warn!(operation = O::NAME, error = %e, "dropping undecodable cache entry");
                cache.remove(key);
                None
            }
        }
    }

    /// Extract the `data` member of a response, applying GraphQL error rules.
    fn data_payload(
        operation: &str,
        response: &Response,
    ) -> Result<Option<serde_json::Value>, GraphQlError> {
        let envelope = response.json::<Envelope>();

        if !response.is_success() {
            let message = match &envelope {
                Ok(Envelope {
                    errors: Some(errors),
                    ..
                }) if !errors.is_empty() => join_messages(errors),
                _ => body_preview(response),
            };
            return Err(GraphQlError::Status {
                operation: operation.to_string(),
                status: response.status,
                message,
            });
        }

        let envelope = envelope.map_err(|e| GraphQlError::Decode {
            operation: operation.to_string(),
            message: e.to_string(),
        })?;

        let data = envelope.data.filter(|d| !d.is_null());
        let errors = envelope.errors.unwrap_or_default();

        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            if data.is_none() {
                return Err(GraphQlError::Server {
                    operation: operation.to_string(),
                    messages,
                });
            }
            tracing::warn!(
                operation,
                errors = %messages.join("; "),
                "graphql response carried partial errors"
            );
        }

        Ok(data)
    }
}

fn join_messages(errors: &[ErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn body_preview(response: &Response) -> String {
    let text = response.text().unwrap_or_default();
    match text.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text,
    }
}
