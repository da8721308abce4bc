use log::{error, info};
use serde_json::json;

/// Logs an operation outcome to CloudWatch as a single JSON line.
pub fn log_info(operation: &str, detail: &str) {
    info!("{}", json!({
        "operation": operation,
        "detail": detail
    }));
}

/// Logs an operation failure to CloudWatch as a single JSON line.
pub fn log_error(operation: &str, detail: &str) {
    error!("{}", json!({
        "operation": operation,
        "error": detail
    }));
}
