use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ETL_SUCCESS_STATUS_CODE: u16 = 200;
pub const ETL_SUCCESS_BODY: &str = "ETL ejecutado correctamente desde Lambda";

/// HTTP-style envelope returned by the ETL trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LambdaResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl LambdaResponse {
    pub fn etl_success() -> Self {
        Self {
            status_code: ETL_SUCCESS_STATUS_CODE,
            body: ETL_SUCCESS_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryExecutionResponse {
    #[serde(rename = "QueryExecutionId")]
    pub query_execution_id: String,
}

/// Parameters of a single `StartQueryExecution` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExecutionRequest {
    pub query_string: String,
    pub database: String,
    pub output_location: String,
    pub work_group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("Request payload must be a JSON object")]
    NotAnObject,
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),
    #[error("Request body must be a JSON object")]
    BodyNotAnObject,
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Keys only API Gateway proxy events (REST v1 and HTTP v2) carry.
const PROXY_EVENT_MARKERS: [&str; 3] = ["requestContext", "httpMethod", "routeKey"];

/// Unwraps the `body` of an API Gateway proxy event. Any other event is a
/// direct invocation and passes through unchanged, `body` key included.
pub fn normalize_event(event: Value) -> Result<Map<String, Value>, EventError> {
    let Value::Object(mut object) = event else {
        return Err(EventError::NotAnObject);
    };

    if !PROXY_EVENT_MARKERS
        .iter()
        .any(|marker| object.contains_key(*marker))
    {
        return Ok(object);
    }

    let Some(body) = object.remove("body") else {
        return Ok(Map::new());
    };

    match body {
        Value::Null => Ok(Map::new()),
        Value::Object(inner) => Ok(inner),
        Value::String(text) => match serde_json::from_str(&text) {
            Ok(Value::Object(inner)) => Ok(inner),
            Ok(_) => Err(EventError::BodyNotAnObject),
            Err(error) => Err(EventError::MalformedBody(error.to_string())),
        },
        _ => Err(EventError::BodyNotAnObject),
    }
}

/// Looks up a non-blank string field. Stricter than a plain key lookup:
/// numbers, arrays and other non-string values are rejected, not stringified.
pub fn required_str_field<'a>(
    payload: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, EventError> {
    let value = payload.get(field).ok_or(EventError::MissingField(field))?;
    let Some(text) = value.as_str() else {
        return Err(EventError::InvalidField {
            field,
            reason: format!("must be a string, got {}", json_type_name(value)),
        });
    };
    if text.trim().is_empty() {
        return Err(EventError::InvalidField {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(text)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn etl_success_uses_lambda_field_names() {
        let value = serde_json::to_value(LambdaResponse::etl_success()).expect("serializes");
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "body": "ETL ejecutado correctamente desde Lambda",
            })
        );
    }

    #[test]
    fn query_response_uses_athena_field_name() {
        let response = QueryExecutionResponse {
            query_execution_id: "abc-123".to_string(),
        };
        let value = serde_json::to_value(response).expect("serializes");
        assert_eq!(value, json!({ "QueryExecutionId": "abc-123" }));
    }

    #[test]
    fn direct_invocation_passes_through() {
        let payload = normalize_event(json!({ "bucket": "b" })).expect("object event");
        assert_eq!(payload.get("bucket"), Some(&json!("b")));
    }

    #[test]
    fn direct_invocation_keeps_its_own_body_key() {
        for event in [
            json!({ "bucket": "b", "body": null }),
            json!({ "bucket": "b", "body": "run" }),
            json!({ "bucket": "b", "body": { "x": 1 } }),
        ] {
            let payload = normalize_event(event).expect("direct event");
            assert_eq!(required_str_field(&payload, "bucket").expect("bucket"), "b");
        }
    }

    #[test]
    fn unwraps_proxy_string_body() {
        let payload = normalize_event(json!({
            "requestContext": { "requestId": "r-1" },
            "body": "{\"bucket\":\"from-body\"}",
        }))
        .expect("should parse");
        assert_eq!(
            required_str_field(&payload, "bucket").expect("bucket"),
            "from-body"
        );
    }

    #[test]
    fn unwraps_proxy_object_body() {
        let payload = normalize_event(json!({
            "httpMethod": "POST",
            "body": { "bucket": "object-body" },
        }))
        .expect("should unwrap");
        assert_eq!(
            required_str_field(&payload, "bucket").expect("bucket"),
            "object-body"
        );
        assert!(!payload.contains_key("httpMethod"));
    }

    #[test]
    fn proxy_null_or_missing_body_is_empty_payload() {
        let payload = normalize_event(json!({ "routeKey": "POST /query", "body": null }))
            .expect("null body");
        assert!(payload.is_empty());

        let payload = normalize_event(json!({ "routeKey": "POST /query", "bucket": "outer" }))
            .expect("no body");
        assert!(payload.is_empty());
    }

    #[test]
    fn rejects_non_object_events() {
        assert_eq!(
            normalize_event(json!(["bucket"])).expect_err("array event"),
            EventError::NotAnObject
        );
        assert_eq!(
            normalize_event(json!({ "httpMethod": "POST", "body": "[1, 2]" }))
                .expect_err("array body"),
            EventError::BodyNotAnObject
        );
        assert!(matches!(
            normalize_event(json!({ "httpMethod": "POST", "body": "{not json" }))
                .expect_err("bad json"),
            EventError::MalformedBody(_)
        ));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let payload = Map::new();
        let error = required_str_field(&payload, "bucket").expect_err("missing");
        assert_eq!(error, EventError::MissingField("bucket"));
        assert_eq!(error.to_string(), "missing required field 'bucket'");
    }

    #[test]
    fn non_string_and_blank_fields_are_invalid() {
        let payload = normalize_event(json!({ "bucket": 42 })).expect("object");
        let error = required_str_field(&payload, "bucket").expect_err("number");
        assert_eq!(error.to_string(), "field 'bucket' must be a string, got number");

        let payload = normalize_event(json!({ "bucket": "  " })).expect("object");
        assert!(matches!(
            required_str_field(&payload, "bucket"),
            Err(EventError::InvalidField { field: "bucket", .. })
        ));
    }
}
