//! Shared models and utilities for the arnkit Lambda services: ARN
//! construction and decomposition, plus the request/response plumbing the
//! Lambda crates have in common.

pub mod models;
pub mod utilities;
