pub mod arn;
pub mod config;
pub mod logging;
pub mod requests;
pub mod responses;
