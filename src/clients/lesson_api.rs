use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::{ApiError, RequestOptions};
use crate::model::{Lesson, OrderRequest};

/// Expected top-level JSON shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Array,
    Object,
}

/// Checks `data` has the expected top-level shape.
pub fn validate_api_response(data: &Value, shape: ResponseShape) -> bool {
    match shape {
        ResponseShape::Array => data.is_array(),
        ResponseShape::Object => data.is_object(),
    }
}

/// The lessons API.
///
/// Implementors supply [`LessonApi::request`]; the named calls are provided
/// on top of it.
#[async_trait]
pub trait LessonApi: Send + Sync {
    /// Sends one request to `endpoint` (a path such as `/lessons`).
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError>;

    /// `GET /lessons`
    #[instrument(skip(self))]
    async fn get_lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        debug!("Sending request");
        let body = self.request("/lessons", RequestOptions::get()).await?;
        decode_lessons(body)
    }

    /// `GET /lessons/{id}`
    #[instrument(skip(self))]
    async fn get_lesson(&self, id: &str) -> Result<Lesson, ApiError> {
        debug!("Sending request");
        let body = self
            .request(&format!("/lessons/{id}"), RequestOptions::get())
            .await?;
        if !validate_api_response(&body, ResponseShape::Object) {
            return Err(ApiError::UnexpectedResponse("object"));
        }
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /search?q=...`, or the full list when `query` is blank.
    #[instrument(skip(self))]
    async fn search_lessons(&self, query: &str) -> Result<Vec<Lesson>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return self.get_lessons().await;
        }
        debug!("Sending request");
        let body = self
            .request("/search", RequestOptions::get().query("q", query))
            .await?;
        decode_lessons(body)
    }

    /// `POST /orders`. Returns the server's order record as-is.
    #[instrument(skip(self, order), fields(lessons = order.lesson_ids.len()))]
    async fn create_order(&self, order: &OrderRequest) -> Result<Value, ApiError> {
        debug!(?order, "create_order called");
        let body = serde_json::to_value(order).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.request("/orders", RequestOptions::post(body)).await
    }

    /// `PUT /lessons/{id}` with `{"spaces": spaces}`.
    #[instrument(skip(self))]
    async fn update_lesson_spaces(&self, id: &str, spaces: u32) -> Result<Value, ApiError> {
        debug!("Sending request");
        self.request(
            &format!("/lessons/{id}"),
            RequestOptions::put(json!({ "spaces": spaces })),
        )
        .await
    }
}

fn decode_lessons(body: Value) -> Result<Vec<Lesson>, ApiError> {
    if !validate_api_response(&body, ResponseShape::Array) {
        return Err(ApiError::UnexpectedResponse("array"));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
