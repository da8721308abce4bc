use http::Response;
use lambda_http::{Body, Request};
use serde::Serialize;
use serde_json::Value;

use arnkit_shared::utilities::arn::{aws_region_account_from_context, interpolate_arn_variables};
use arnkit_shared::utilities::config;
use arnkit_shared::utilities::requests::body_field;
use arnkit_shared::utilities::responses::{error_response, success_response};

#[derive(Serialize)]
pub struct InterpolateResponse {
    pub rendered: String,
}

/// Renders a state machine template by substituting the ARN variables.
/// Region and account fall back to the invocation context and then the
/// Lambda environment; the lambda name has no fallback.
pub async fn handler(event: Request, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let template = match body_field(&body, "template") {
        Some(template) => template,
        None => return error_response("Missing template"),
    };

    let (context_region, context_account) = aws_region_account_from_context(&event);
    let region = body_field(&body, "region")
        .map(str::to_string)
        .or(context_region.filter(|value| !value.is_empty()))
        .or_else(config::get_aws_region);
    let account_id = body_field(&body, "account_id")
        .map(str::to_string)
        .or(context_account.filter(|value| !value.is_empty()))
        .or_else(config::get_aws_account_id);
    let lambda_name = body_field(&body, "lambda_name").map(str::to_string);

    match interpolate_arn_variables(
        template,
        region.as_deref(),
        account_id.as_deref(),
        lambda_name.as_deref(),
    ) {
        Ok(rendered) => success_response(InterpolateResponse { rendered }),
        Err(err) => error_response(err.to_string()),
    }
}
