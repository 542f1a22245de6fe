//! API documentation
//!
//! OpenAPI specification for the relay endpoint.

pub mod openapi;

pub use openapi::RelayApiDoc;
