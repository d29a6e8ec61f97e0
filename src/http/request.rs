//! Request identification and body decoding.
//!
//! Every request gets an `x-request-id` (UUID v4) as early as possible so the
//! trace span and the response carry the same id. Ids sent by the client
//! are kept.
//!
//! Post fields arrive as JSON or as a URL-encoded form. A missing body, an
//! empty body, or an unrecognised content type decodes to the default
//! (all fields absent); only a body that fails to parse is rejected.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request as AxumRequest},
    http::{header, HeaderMap, HeaderValue, Request},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates request ids from random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Post fields decoded from a JSON or URL-encoded body.
#[derive(Debug, Clone, Default)]
pub struct PostFields<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<T, S> FromRequest<S> for PostFields<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: AxumRequest, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(request.headers()) {
            BodyKind::Form => {
                let Form(fields) = Form::<T>::from_request(request, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(fields))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(request, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }
                let Json(fields) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
                Ok(Self(fields))
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}
