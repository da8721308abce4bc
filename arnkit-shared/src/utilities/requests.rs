use lambda_http::Request;
use serde_json::{json, Value};

/// Extracts the JSON body from a request, empty object on malformed input.
pub fn extract_body(event: &Request) -> Value {
    serde_json::from_slice(event.body().as_ref()).unwrap_or_else(|_| json!({}))
}

/// Reads an optional string field out of a JSON body.
pub fn body_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}
