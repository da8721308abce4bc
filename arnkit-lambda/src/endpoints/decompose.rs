use http::Response;
use lambda_http::Body;
use serde_json::Value;

use arnkit_shared::models::arn::Arn;
use arnkit_shared::utilities::logging::log_error;
use arnkit_shared::utilities::requests::body_field;
use arnkit_shared::utilities::responses::{error_response, success_response};

/// Strict decomposition of an ARN into its sections. Unlike the lenient
/// helpers, a malformed input here is a 400 with the parse error.
pub async fn handler(body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let input = match body_field(&body, "arn") {
        Some(input) => input,
        None => return error_response("Missing arn"),
    };

    match Arn::parse(input) {
        Ok(arn) => success_response(arn),
        Err(err) => {
            log_error("arn_decompose", &err.to_string());
            error_response(err.to_string())
        }
    }
}
