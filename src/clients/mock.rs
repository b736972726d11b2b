//! # Mock API
//!
//! An in-process [`LessonApi`] for testing code that talks to the server
//! without starting one.
//!
//! Queue the requests you expect, in order, with the response each should
//! get. Every call pops the next expectation and panics if the method or
//! endpoint differs. Call [`MockApi::verify`] at the end to make sure every
//! expectation was consumed.
//!
//! ```ignore
//! let mock = MockApi::new();
//! mock.expect(Method::GET, "/lessons").return_ok(json!([]));
//!
//! let lessons = mock.get_lessons().await?;
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::{ApiError, LessonApi, RequestOptions};

struct Expectation {
    method: Method,
    endpoint: String,
    response: Result<Value, ApiError>,
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub options: RequestOptions,
}

/// Expectation-driven stand-in for the lessons API.
///
/// Clones share the same queue, so a test can hand one clone to the code
/// under test and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with `method` to `endpoint` (path only, no query).
    pub fn expect(&self, method: Method, endpoint: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            endpoint: endpoint.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// All requests received so far, oldest first.
    pub fn received(&self) -> Vec<RecordedRequest> {
        self.received.lock().unwrap().clone()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps
                .iter()
                .map(|e| format!("{} {}", e.method, e.endpoint))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                pending
            );
        }
    }
}

#[async_trait]
impl LessonApi for MockApi {
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        let method = options.method.clone();
        self.received.lock().unwrap().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            options,
        });

        match expectation {
            Some(exp) if exp.method == method && exp.endpoint == endpoint => exp.response,
            Some(exp) => panic!(
                "Unexpected request: got {} {}, expected {} {}",
                method, endpoint, exp.method, exp.endpoint
            ),
            None => panic!("Unexpected request: {} {} (no expectations left)", method, endpoint),
        }
    }
}

/// Builder returned by [`MockApi::expect`].
pub struct ExpectationBuilder {
    method: Method,
    endpoint: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful body.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            endpoint: self.endpoint,
            response,
        });
    }
}
