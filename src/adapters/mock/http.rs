//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, either per URL or from an ordered queue.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: String,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
    /// Wait before producing the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// Shorthand for a 200 JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_ok(&value))
    }

    /// Delay this response by `delay`.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for each request: the front of the queue, then an exact URL
/// match, then a prefix match, then the default response.
///
/// # Example
///
/// ```ignore
/// use graphqlconf::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response(MockResponse::json(serde_json::json!({"data": {"sessions": []}})));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Default response when nothing else matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response.
    pub fn push_response(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(response);
    }

    /// Set a default response for requests without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queued) = self.queue.lock().unwrap().pop_front() {
            return Some(queued);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        self.default_response.lock().unwrap().clone()
    }
}

async fn resolve(response: MockResponse) -> Result<Response, HttpError> {
    let mut current = response;
    loop {
        match current {
            MockResponse::Success(response) => return Ok(response),
            MockResponse::Error(err) => return Err(err),
            MockResponse::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                current = *inner;
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers, body);

        match self.next_response(url) {
            Some(response) => resolve(response).await,
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_url_response_and_recording() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/graphql",
            MockResponse::Success(Response::new(200, Bytes::from("{}"))),
        );

        let response = client
            .post("https://example.com/graphql", "{\"query\":\"q\"}", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].json().unwrap()["query"], "q");
    }

    #[tokio::test]
    async fn test_queue_takes_precedence_and_drains() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::json(serde_json::json!({"n": 0})));
        client.push_response(MockResponse::json(serde_json::json!({"n": 1})));

        let first = client.post("u", "", &Headers::new()).await.unwrap();
        let second = client.post("u", "", &Headers::new()).await.unwrap();
        assert_eq!(first.text().unwrap(), r#"{"n":1}"#);
        assert_eq!(second.text().unwrap(), r#"{"n":0}"#);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.push_response(MockResponse::Error(HttpError::Timeout("slow".into())));
        let result = client.post("u", "", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("slow".into()));
    }

    #[tokio::test]
    async fn test_missing_response_is_error() {
        let client = MockHttpClient::new();
        let result = client.post("https://nowhere", "", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_response() {
        let client = MockHttpClient::new();
        client.push_response(
            MockResponse::json(serde_json::json!({})).after(Duration::from_millis(500)),
        );
        let start = tokio::time::Instant::now();
        client.post("u", "", &Headers::new()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
