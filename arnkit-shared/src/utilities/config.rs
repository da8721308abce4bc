use dotenv::dotenv;
use std::env;

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        println!("Loaded .env file");
    } else {
        println!("No .env file found");
    }
}

/// Region the function runs in, set by the Lambda runtime.
pub fn get_aws_region() -> Option<String> {
    env::var("AWS_REGION").ok()
}

/// Account the function is deployed to. The runtime does not export this,
/// so deployments set it explicitly.
pub fn get_aws_account_id() -> Option<String> {
    env::var("AWS_ACCOUNT_ID").ok()
}
