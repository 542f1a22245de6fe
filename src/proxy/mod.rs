//! Proxy module
//!
//! Handles request forwarding to the upstream generative AI provider.

pub mod gemini;
pub mod headers;
pub mod logging;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::{GenerativeUpstream, UpstreamRequest};
