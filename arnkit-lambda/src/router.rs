use lambda_http::RequestExt;
use lambda_http::{Body, Request, Response};

use crate::endpoints::{decompose, interpolate, resolve, status};
use arnkit_shared::utilities::requests::extract_body;
use arnkit_shared::utilities::responses::{not_found_response, success_response};

const GET: &str = "GET";
const POST: &str = "POST";

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.raw_http_path();
    let path = raw_path.strip_prefix("/dev")
        .or_else(|| raw_path.strip_prefix("/prod"))
        .unwrap_or(&raw_path);

    log::info!("Received request for path: {}", path);
    let event_body = extract_body(&event);

    match (event.method().as_str(), path) {
        //Monitor
        (GET, "/status") => success_response(status::handle().await),

        //ARN toolbox
        (POST, "/arn/resolve") => resolve::handler(event, event_body).await,
        (POST, "/arn/decompose") => decompose::handler(event_body).await,
        (POST, "/arn/interpolate") => interpolate::handler(event, event_body).await,

        //Not found
        _ => not_found_response(),
    }
}
