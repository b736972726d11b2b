//! # API Client
//!
//! A single request helper over `reqwest` that applies the configured timeout,
//! merges headers, and turns every failure into an [`ApiError`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ApiError, LessonApi};
use crate::config::ApiConfig;

/// Per-request settings: method, extra headers, query pairs and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            method: Method::PUT,
            body: Some(body),
            ..Self::default()
        }
    }

    /// Adds a header. Overrides a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// Client for the lessons API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] if the underlying HTTP client cannot be
    /// constructed (e.g. no TLS backend).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a lesson image served by the API.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/images/{}", self.base_url, filename)
    }

    fn merged_headers(extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Sends one request and returns the decoded JSON body.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, ?options.query, "Sending request");

        let mut request = self
            .http
            .request(options.method, &url)
            .headers(Self::merged_headers(&options.headers)?);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(translate_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let err = error_from_response(status, response).await;
            warn!(%url, status = status.as_u16(), error = %err, "Request failed");
            return Err(err);
        }

        let body = response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Decode(e.to_string())
            }
        })?;
        info!(%url, status = status.as_u16(), "Request ok");
        Ok(body)
    }
}

#[async_trait]
impl LessonApi for ApiClient {
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.send(endpoint, options).await
    }
}

fn translate_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        warn!(error = %e, "Request timed out");
        ApiError::Timeout
    } else if e.is_connect() || e.is_request() {
        warn!(error = %e, "Network failure");
        ApiError::Network(e.to_string())
    } else {
        warn!(error = %e, "Transport failure");
        ApiError::Request(e.to_string())
    }
}

/// Builds the error for a non-2xx response.
///
/// Prefers the body's `error` field; a JSON body without one keeps the
/// generic status message, and a non-JSON body falls back to the reason
/// phrase.
async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status: status.as_u16(),
        message: http_error_message(status, &body),
    }
}

fn http_error_message(status: StatusCode, body: &str) -> String {
    let fallback = format!("HTTP error! status: {}", status.as_u16());
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map_or(fallback, str::to_string),
        Err(_) => status
            .canonical_reason()
            .map_or(fallback, str::to_string),
    }
}
