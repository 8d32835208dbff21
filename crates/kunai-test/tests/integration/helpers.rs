#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service over a fresh in-memory store
//! - Making HTTP requests with `WebDAV` verbs
//! - Asserting on responses
//!
//! ## Isolation
//! Each test builds its own service with its own `MemoryBackend`, so tests
//! run in parallel without sharing tree state.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};

use kunai_test::component::config::{
    AuthConfig, ConfigHandler, DavConfig, LoggingConfig, ServerConfig, Settings,
};
use kunai_test::component::store::{DavStore, MemoryBackend, StoreHandler};

/// Test configuration - static struct instead of loading from a file.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            debug: false,
        },
        dav: DavConfig {
            prefix: String::new(),
        },
        auth: AuthConfig {
            username: "admin".to_string(),
            password: None,
            realm: "Secure Area".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// Test configuration with basic auth enabled.
#[must_use]
pub fn config_with_password(password: &str) -> Settings {
    let mut settings = test_config();
    settings.auth.password = Some(password.to_string());
    settings
}

/// Test configuration with the tree mounted under a path prefix.
#[must_use]
pub fn config_with_prefix(prefix: &str) -> Settings {
    let mut settings = test_config();
    settings.dav.prefix = prefix.to_string();
    settings
}

/// Creates a test service over a fresh in-memory store.
///
/// ## Summary
/// The service carries the same handler chain as `main.rs`: store and
/// config injection, protocol headers, auth, then the method routes. No
/// password is configured, so the tree is open.
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_with_config(test_config())
}

/// Creates a test service with explicit settings, for auth and prefix tests.
#[must_use]
pub fn create_test_service_with_config(settings: Settings) -> Service {
    let store = DavStore::new(Arc::new(MemoryBackend::new()));

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: settings.clone(),
        })
        .push(kunai_test::app::api::routes(&settings));

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

    /// Creates a new OPTIONS request.
    #[must_use]
    pub fn options(path: &str) -> Self {
        Self::new(Method::OPTIONS, path)
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new HEAD request.
    #[must_use]
    pub fn head(path: &str) -> Self {
        Self::new(Method::HEAD, path)
    }

    /// Creates a new PUT request.
    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Creates a new PROPFIND request.
    #[must_use]
    pub fn propfind(path: &str) -> Self {
        Self::new(Method::from_bytes(b"PROPFIND").expect("Valid method"), path)
    }

    /// Creates a new PROPPATCH request.
    #[must_use]
    pub fn proppatch(path: &str) -> Self {
        Self::new(
            Method::from_bytes(b"PROPPATCH").expect("Valid method"),
            path,
        )
    }

    /// Creates a new MKCOL request.
    #[must_use]
    pub fn mkcol(path: &str) -> Self {
        Self::new(Method::from_bytes(b"MKCOL").expect("Valid method"), path)
    }

    /// Creates a new COPY request.
    #[must_use]
    pub fn copy(path: &str) -> Self {
        Self::new(Method::from_bytes(b"COPY").expect("Valid method"), path)
    }

    /// Creates a new MOVE request.
    #[must_use]
    pub fn r#move(path: &str) -> Self {
        Self::new(Method::from_bytes(b"MOVE").expect("Valid method"), path)
    }

    /// Alias for move (since 'move' is a reserved keyword).
    #[must_use]
    pub fn move_resource(path: &str) -> Self {
        Self::r#move(path)
    }

    /// Creates a new LOCK request.
    #[must_use]
    pub fn lock(path: &str) -> Self {
        Self::new(Method::from_bytes(b"LOCK").expect("Valid method"), path)
    }

    /// Creates a new UNLOCK request.
    #[must_use]
    pub fn unlock(path: &str) -> Self {
        Self::new(Method::from_bytes(b"UNLOCK").expect("Valid method"), path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the Depth header.
    #[must_use]
    pub fn depth(self, depth: &str) -> Self {
        self.header("Depth", depth)
    }

    /// Sets the Timeout header for LOCK.
    #[must_use]
    pub fn timeout(self, timeout: &str) -> Self {
        self.header("Timeout", timeout)
    }

    /// Sets the Destination header for MOVE.
    #[must_use]
    pub fn destination(self, dest: &str) -> Self {
        self.header("Destination", dest)
    }

    /// Sets the Overwrite header for MOVE.
    #[must_use]
    pub fn overwrite(self, value: bool) -> Self {
        self.header("Overwrite", if value { "T" } else { "F" })
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets a basic auth Authorization header.
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let token = STANDARD.encode(format!("{username}:{password}"));
        self.header("Authorization", &format!("Basic {token}"))
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the request cannot be sent or the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        // Build the URL
        let url = format!("http://127.0.0.1:5800{}", self.path);

        // Create the test client with the appropriate method
        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "HEAD" => TestClient::head(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            "OPTIONS" => TestClient::options(&url),
            _ => {
                // For custom methods (PROPFIND, MKCOL, etc.), use RequestBuilder directly
                RequestBuilder::new(&url, self.method.clone())
            }
        };

        // Add headers using HeaderName
        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        // Add body if present
        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        // Send the request
        let mut response = client.send(service).await;

        // Extract status code
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Extract headers
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        // Extract body
        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}",
            self.status
        );
        self
    }

    /// Asserts that the response status is in the 2xx range.
    #[must_use]
    pub fn assert_success(self) -> Self {
        assert!(
            self.status.is_success(),
            "Expected success status but got {}",
            self.status
        );
        self
    }

    /// Asserts that a header exists with the expected value.
    #[must_use]
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        let found = self
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name));
        assert!(found.is_some(), "Header '{name}' not found in response");
        let (_, value) = found.expect("Header should exist");
        assert_eq!(
            value, expected,
            "Header '{name}' expected '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that a header exists (regardless of value).
    #[must_use]
    pub fn assert_header_exists(self, name: &str) -> Self {
        let found = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name));
        assert!(found, "Header '{name}' not found in response");
        self
    }

    /// Asserts that no header with the given name is present.
    #[must_use]
    pub fn assert_header_missing(self, name: &str) -> Self {
        let found = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name));
        assert!(!found, "Header '{name}' unexpectedly present in response");
        self
    }

    /// Asserts that a header contains the expected substring.
    #[must_use]
    pub fn assert_header_contains(self, name: &str, expected: &str) -> Self {
        let found = self
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name));
        assert!(found.is_some(), "Header '{name}' not found in response");
        let (_, value) = found.expect("Header should exist");
        assert!(
            value.contains(expected),
            "Header '{name}' expected to contain '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = String::from_utf8_lossy(&self.body);
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body does not contain the specified substring.
    #[must_use]
    pub fn assert_body_not_contains(self, unexpected: &str) -> Self {
        let body = String::from_utf8_lossy(&self.body);
        assert!(
            !body.contains(unexpected),
            "Expected body to NOT contain '{unexpected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body is empty.
    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body but got {} bytes",
            self.body.len()
        );
        self
    }

    /// Asserts that the response body is valid XML.
    #[must_use]
    pub fn assert_valid_xml(self) -> Self {
        let body_str = String::from_utf8_lossy(&self.body);
        // Simple XML validation - just check for well-formed structure
        assert!(
            body_str.trim().starts_with("<?xml") || body_str.trim().starts_with('<'),
            "Expected XML response but got:\n{body_str}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the ETag header value.
    #[must_use]
    pub fn get_etag(&self) -> Option<&str> {
        self.get_header("ETag")
    }

    /// Gets the Content-Type header value.
    #[must_use]
    pub fn get_content_type(&self) -> Option<&str> {
        self.get_header("Content-Type")
    }

    /// Counts the number of response elements in a multistatus body.
    #[must_use]
    pub fn count_multistatus_responses(&self) -> usize {
        self.body_string().matches("<D:response>").count()
    }

    /// Counts the number of propstat elements in a multistatus body.
    #[must_use]
    pub fn count_propstats(&self) -> usize {
        self.body_string().matches("<D:propstat>").count()
    }
}
