//! JSON body extractor and responder for the experiment endpoints

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;

use super::error::{ApiError, ApiErrorType};

/// JSON body whose rejections use the API error envelope
///
/// Malformed JSON is a 400 `json_parse_error`. Well-formed JSON that does not
/// fit the request shape, such as a string inside a sample array, is a 422
/// `invalid_request_body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(&req) {
            return Err(ApiError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiErrorType::InvalidRequestError,
                "Expected request with `Content-Type: application/json`",
            )
            .with_code("unsupported_media_type"));
        }

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::new(
                rejection.status(),
                ApiErrorType::InvalidRequestError,
                format!("Failed to read request body: {}", rejection.body_text()),
            )
            .with_code("body_read_error")
        })?;

        serde_json::from_slice(&body).map(Json).map_err(body_error)
    }
}

fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"))
}

fn body_error(err: serde_json::Error) -> ApiError {
    match err.classify() {
        Category::Data => ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::InvalidRequestError,
            format!("Invalid request body: {}", err),
        )
        .with_code("invalid_request_body"),
        Category::Syntax | Category::Eof | Category::Io => {
            ApiError::bad_request(format!("Invalid JSON syntax: {}", err))
                .with_code("json_parse_error")
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
