use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

const UNAVAILABLE_DETAIL: &str = "AI service not available";
const INTERNAL_DETAIL: &str = "Internal server error";
const OPAQUE_MESSAGE: &str = "An error occurred";

/// Where a rejected value came from; first element of [`FieldError::loc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Body,
    Query,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(
        source: Source,
        path: impl IntoIterator<Item = Value>,
        msg: impl Into<String>,
        kind: &'static str,
    ) -> Self {
        let mut loc = vec![json!(source)];
        loc.extend(path);
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    pub fn at_root(source: Source, msg: impl Into<String>, kind: &'static str) -> Self {
        Self::new(source, Vec::new(), msg, kind)
    }

    pub fn out_of_range(source: Source, field: &str, msg: impl Into<String>) -> Self {
        Self::new(source, [Value::from(field)], msg, "value_error")
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed ({} field error(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("AI service not available")]
    Unavailable,

    /// `detail` carries the raw fault text only in testing mode.
    #[error("internal error")]
    Internal { detail: Option<String> },
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::Validation(vec![err])
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation(errors) => json!({ "detail": errors }),
            Self::Unavailable => json!({ "detail": UNAVAILABLE_DETAIL }),
            Self::Internal { detail } => internal_body(detail),
        };
        (status, Json(body)).into_response()
    }
}

pub(crate) fn internal_body(detail: Option<String>) -> Value {
    json!({
        "detail": INTERNAL_DETAIL,
        "message": detail.unwrap_or_else(|| OPAQUE_MESSAGE.to_string()),
    })
}
