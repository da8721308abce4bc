use http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

pub fn error_response(message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(ErrorBody { error: message.into() }, StatusCode::BAD_REQUEST)
}

pub fn not_found_response() -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(ErrorBody { error: "Not Found".to_string() }, StatusCode::NOT_FOUND)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    log::info!("Responding {} with {}", code, body);
    Response::builder()
        .status(code)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
