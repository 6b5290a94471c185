//! JSON response body with an explicit content type.
//!
//! Serialization happens up front; a payload that cannot be encoded turns
//! into an empty 500 instead of a partial body.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type sent with every JSON body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `T` as the response body
#[derive(Debug, Clone)]
pub struct JsonReply<T>(pub T);

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        let content_type = [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))];

        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (content_type, bytes).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response body");
                (StatusCode::INTERNAL_SERVER_ERROR, content_type).into_response()
            }
        }
    }
}
