use http::Response;
use lambda_http::{Body, Request};
use serde::Serialize;
use serde_json::Value;

use arnkit_shared::utilities::arn::{aws_region_account_from_context, lambda_arn, role_arn, step_arn};
use arnkit_shared::utilities::config;
use arnkit_shared::utilities::logging::log_info;
use arnkit_shared::utilities::requests::body_field;
use arnkit_shared::utilities::responses::{error_response, success_response};

#[derive(Serialize)]
pub struct ResolveResponse {
    pub arn: String,
}

/// Qualifies a bare resource name into a full ARN. Region and account come
/// from the request body when given, then the invocation context, then the
/// Lambda environment.
pub async fn handler(event: Request, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let service = body_field(&body, "service").unwrap_or("lambda");
    let name = match body_field(&body, "name") {
        Some(name) => name,
        None => return error_response("Missing name"),
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

    let resolved = match service {
        "lambda" => lambda_arn(region.as_deref(), account_id.as_deref(), Some(name)),
        "states" => step_arn(region.as_deref(), account_id.as_deref(), Some(name)),
        "iam" => role_arn(account_id.as_deref(), Some(name)),
        other => return error_response(format!("Unknown service: {}", other)),
    };

    match resolved {
        Some(arn) => {
            log_info("arn_resolve", &arn);
            success_response(ResolveResponse { arn })
        }
        None => error_response("Missing name"),
    }
}
