#![allow(dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service with its own in-memory store
//! - Making HTTP requests
//! - Asserting on JSON envelopes

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde_json::{Value, json};

use sanctuary_test::component::clock::FixedClock;
use sanctuary_test::component::config::*;
use sanctuary_test::component::constants::EVENTS_ROUTE_PREFIX;
use sanctuary_test::component::handlers::{ClockHandler, StoreHandler};
use sanctuary_test::component::store::MemoryEventStore;

pub use tracing;

/// The instant every test service reports as "now": Sunday 2026-03-01 12:00 UTC.
#[must_use]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid test instant")
}

/// Test configuration - static struct instead of loading from file.
#[must_use]
pub fn test_config(timezone: chrono_tz::Tz) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        events: EventsConfig {
            timezone,
            lookahead: 3,
            horizon: 24,
        },
    }
}

/// ## Summary
/// Creates a service with a fresh store, a UTC calendar and a clock pinned
/// to [`test_now`]. Every call is isolated from every other.
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_in(chrono_tz::UTC)
}

/// ## Summary
/// Same as [`create_test_service`], expanding recurrences in `timezone`.
#[must_use]
pub fn create_test_service_in(timezone: chrono_tz::Tz) -> Service {
    let router = Router::new()
        .hoop(StoreHandler {
            store: MemoryEventStore::new(),
        })
        .hoop(ConfigHandler::new(test_config(timezone)))
        .hoop(ClockHandler {
            clock: Arc::new(FixedClock(test_now())),
        })
        .push(sanctuary_test::app::api::routes());

    Service::new(router)
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(self, value: &Value) -> Self {
        self.header("Content-Type", "application/json")
            .body(value.to_string().into_bytes())
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the request cannot be sent or the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = salvo::http::header::HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|err| panic!("Body is not JSON ({err}): {}", self.body_string()))
    }

    /// Asserts a `{ success: true, data }` envelope and returns `data`.
    #[must_use]
    pub fn data(&self) -> Value {
        let body = self.json();
        assert_eq!(body["success"], json!(true), "Expected success envelope: {body}");
        assert!(body.get("error").is_none(), "Unexpected error field: {body}");
        body["data"].clone()
    }

    /// Asserts a `{ success: false, error }` envelope and returns the message.
    #[must_use]
    pub fn error_message(&self) -> String {
        let body = self.json();
        assert_eq!(body["success"], json!(false), "Expected error envelope: {body}");
        assert!(body.get("data").is_none(), "Unexpected data field: {body}");
        body["error"]
            .as_str()
            .expect("error should be a string")
            .to_string()
    }
}

/// A minimal single event draft.
#[must_use]
pub fn event_body(title: &str, start: &str, end: &str) -> Value {
    json!({
        "title": title,
        "description": "",
        "startDate": start,
        "endDate": end,
        "location": "Fellowship Hall",
    })
}

/// A recurring event draft with the given rule.
#[must_use]
pub fn recurring_body(title: &str, start: &str, end: &str, rule: Value) -> Value {
    let mut body = event_body(title, start, end);
    body["isRecurring"] = json!(true);
    body["recurrencePattern"] = rule;
    body
}

/// ## Summary
/// Creates an event through the API and returns its id.
///
/// ## Panics
/// Panics if the server does not answer 201.
pub async fn create_event(service: &Service, body: &Value) -> String {
    let response = TestRequest::post(EVENTS_ROUTE_PREFIX)
        .json_body(body)
        .send(service)
        .await
        .assert_status(StatusCode::CREATED);
    response.data()["id"]
        .as_str()
        .expect("created event has an id")
        .to_string()
}

/// Parses an RFC 3339 value returned by the API.
#[must_use]
pub fn instant(value: &Value) -> DateTime<Utc> {
    let raw = value.as_str().expect("timestamp should be a string");
    DateTime::parse_from_rfc3339(raw)
        .unwrap_or_else(|err| panic!("Bad timestamp {raw}: {err}"))
        .with_timezone(&Utc)
}

/// Start instants of an occurrence list.
#[must_use]
pub fn starts(occurrences: &Value) -> Vec<DateTime<Utc>> {
    occurrences
        .as_array()
        .expect("occurrences should be an array")
        .iter()
        .map(|occurrence| instant(&occurrence["startDate"]))
        .collect()
}

/// Shorthand for a UTC instant in test expectations.
#[must_use]
pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid instant")
}
