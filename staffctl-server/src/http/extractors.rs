//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an integer id from the single path parameter.
async fn integer_path_param<S>(
    parts: &mut Parts,
    state: &S,
    rejection: ApiError,
) -> Result<i64, ApiError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = match Path::from_request_parts(parts, state).await {
        Ok(path) => path,
        Err(_) => return Err(rejection),
    };

    raw.parse::<i64>().map_err(|_| rejection)
}

/// `{employee_id}` path segment parsed as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        integer_path_param(parts, state, ApiError::InvalidEmployeeId)
            .await
            .map(Self)
    }
}

/// `{job_id}` path segment parsed as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobId(pub i64);

impl<S> FromRequestParts<S> for JobId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        integer_path_param(parts, state, ApiError::InvalidJobId)
            .await
            .map(Self)
    }
}

/// Lenient JSON body.
///
/// Unlike `axum::Json` this ignores the Content-Type header and treats a
/// literal `null` as the default value. Any decode failure is
/// `ApiError::InvalidPayload`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidPayload)?;

        let value = serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|_| ApiError::InvalidPayload)?
            .unwrap_or_default();

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobPayload;
    use axum::body::Body;

    fn post(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn json_body_without_content_type() {
        let JsonBody(payload) =
            JsonBody::<JobPayload>::from_request(post(r#"{"department":"Eng","job_title":"SWE"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.department, "Eng");
        assert_eq!(payload.job_title, "SWE");
    }

    #[tokio::test]
    async fn json_body_null_is_default() {
        let JsonBody(payload) = JsonBody::<JobPayload>::from_request(post("null"), &())
            .await
            .unwrap();
        assert_eq!(payload, JobPayload::default());
    }

    #[tokio::test]
    async fn json_body_rejects_garbage() {
        for body in ["", "not json", "[1,2]", r#"{"department":"#] {
            let err = JsonBody::<JobPayload>::from_request(post(body), &())
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::InvalidPayload), "body {body:?}");
        }
    }
}
