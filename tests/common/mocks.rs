//! wiremock helpers for the GraphQL endpoint.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use graphqlconf::adapters::ReqwestHttpClient;
use graphqlconf::conference::ConferenceRepository;
use graphqlconf::graphql::GraphQlClient;

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Full endpoint URL on `server`.
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), GRAPHQL_PATH)
}

/// A repository talking to `server` over real HTTP.
pub fn repository_for(server: &MockServer) -> ConferenceRepository<ReqwestHttpClient> {
    ConferenceRepository::new(GraphQlClient::new(endpoint(server), ReqwestHttpClient::new()))
}

/// Answer `operation` with `status` and `body`, expecting exactly `times` calls.
pub async fn mount_operation(
    server: &MockServer,
    operation: &str,
    status: u16,
    body: Value,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

pub fn sessions_body() -> Value {
    json!({"data": {"sessions": [
        {
            "id": "s1",
            "title": "Federation at scale",
            "description": "Gateways and subgraphs.",
            "start": "2025-09-08T10:00:00.000Z",
            "end": "2025-09-08T10:30:00.000Z",
            "event_type": "Talk",
            "event_subtype": "Keynote",
            "venue": "Room A",
            "speakers": [{"username": "ada", "name": "Ada Lovelace", "avatar": "https://img/ada.png"}]
        },
        {
            "id": "s2",
            "title": "Lunch",
            "description": null,
            "start": "2025-09-08T12:00:00.000Z",
            "end": "2025-09-08T13:00:00.000Z",
            "event_type": "Break",
            "event_subtype": null,
            "venue": null,
            "speakers": []
        }
    ]}})
}

pub fn session_details_body() -> Value {
    json!({"data": {"sessions": [
        {
            "id": "s1",
            "title": "Federation at scale",
            "description": "Gateways and subgraphs.",
            "start": "2025-09-08T10:00:00.000Z",
            "end": "2025-09-08T10:30:00.000Z",
            "event_type": "Talk",
            "event_subtype": "Keynote",
            "venue": "Room A",
            "speakers": [{
                "username": "ada",
                "name": "Ada Lovelace",
                "company": "Analytical Engines",
                "position": "Principal Engineer",
                "about": "Writes the first programs.",
                "location": "London",
                "url": "https://ada.dev",
                "avatar": "https://img/ada.png"
            }]
        },
        {
            "id": "s3",
            "title": "Persisted queries",
            "description": "",
            "start": "2025-09-09T09:00:00.000Z",
            "end": "2025-09-09T09:30:00.000Z",
            "event_type": "Talk",
            "event_subtype": "",
            "venue": "Room B",
            "speakers": [
                {"username": "grace", "name": "Grace Hopper", "company": "", "position": "",
                 "about": "", "location": "", "url": "", "avatar": ""},
                {"username": "ada", "name": "Ada Lovelace", "company": "Analytical Engines",
                 "position": "Principal Engineer", "about": "", "location": "London",
                 "url": "https://ada.dev", "avatar": ""}
            ]
        }
    ]}})
}

pub fn speakers_body() -> Value {
    json!({"data": {"speakers": [
        {"username": "ada", "name": "Ada Lovelace", "company": "Analytical Engines",
         "position": "Principal Engineer", "avatar": ""},
        {"username": "grace", "name": "Grace Hopper", "company": null, "position": null,
         "avatar": null}
    ]}})
}

pub fn speaker_details_body() -> Value {
    json!({"data": {"speakers": [
        {"username": "ada", "name": "Ada Lovelace", "company": "Analytical Engines",
         "position": "Principal Engineer", "about": "Writes the first programs.",
         "location": "London", "url": "https://ada.dev", "avatar": "", "years": [2024, 2025]},
        {"username": "grace", "name": "Grace Hopper", "company": "", "position": "",
         "about": "", "location": "", "url": "", "avatar": "", "years": []}
    ]}})
}
