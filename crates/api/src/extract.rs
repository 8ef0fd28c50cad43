//! Extractors that reject malformed input with a 422 before any handler runs.
//!
//! Both decode through `serde_path_to_error` so the failing field can be named
//! in the response. Unknown fields are ignored.

use crate::error::{ApiError, FieldError, Source};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

#[async_trait::async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            FieldError::at_root(Source::Body, e.body_text(), "json_invalid")
        })?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(FieldError::at_root(Source::Body, "Field required", "missing").into());
        }

        let mut de = serde_json::Deserializer::from_slice(&body);
        let value = serde_path_to_error::deserialize(&mut de)
            .map_err(|e| json_field_error(Source::Body, e))?;
        de.end()
            .map_err(|e| FieldError::at_root(Source::Body, e.to_string(), "json_invalid"))?;

        Ok(Self(value))
    }
}

#[async_trait::async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|e| FieldError::at_root(Source::Query, e.to_string(), "value_error"))?;

        let params: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, raw)| (key, query_value(raw)))
            .collect();

        let value = serde_path_to_error::deserialize(Value::Object(params))
            .map_err(|e| json_field_error(Source::Query, e))?;
        Ok(Self(value))
    }
}

/// Query values arrive as text; numeric ones are handed to the typed decoder
/// as numbers so `restaurant_id=1` satisfies an integer field while
/// `restaurant_id=abc` is a type error.
fn query_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(raw)
}

fn json_field_error(
    source: Source,
    err: serde_path_to_error::Error<serde_json::Error>,
) -> FieldError {
    use serde_json::error::Category;
    use serde_path_to_error::Segment;

    let mut path: Vec<Value> = err
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(Value::from(*index)),
            Segment::Map { key } => Some(Value::from(key.as_str())),
            Segment::Enum { variant } => Some(Value::from(variant.as_str())),
            Segment::Unknown => None,
        })
        .collect();

    let inner = err.inner();
    let msg = inner.to_string();
    let kind = match inner.classify() {
        Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        Category::Data => match missing_field(&msg) {
            Some(field) => {
                path.push(Value::from(field));
                return FieldError::new(source, path, "Field required", "missing");
            }
            None => "type_error",
        },
    };

    FieldError::new(source, path, msg, kind)
}

fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        id: i64,
    }

    fn decode(value: Value) -> Result<Probe, FieldError> {
        serde_path_to_error::deserialize(value).map_err(|e| json_field_error(Source::Body, e))
    }

    #[test]
    fn query_values_are_typed() {
        assert_eq!(query_value("12".into()), Value::from(12));
        assert_eq!(query_value("1.5".into()), Value::from(1.5));
        assert_eq!(query_value("abc".into()), Value::from("abc"));
        assert_eq!(query_value("NaN".into()), Value::from("NaN"));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = decode(serde_json::json!({})).unwrap_err();
        assert_eq!(err.kind, "missing");
        assert_eq!(err.loc, vec![Value::from("body"), Value::from("id")]);
    }

    #[test]
    fn wrong_type_points_at_the_field() {
        let err = decode(serde_json::json!({"id": "invalid"})).unwrap_err();
        assert_eq!(err.kind, "type_error");
        assert_eq!(err.loc, vec![Value::from("body"), Value::from("id")]);
    }
}
