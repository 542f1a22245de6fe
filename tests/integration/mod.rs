//! Integration tests for the Genrelay server
//!
//! These tests drive the real router through axum-test with a wiremock
//! server standing in for the Gemini API.

mod metrics;
