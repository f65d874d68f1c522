//! Data models for the analytics service.
//!
//! This module contains the log entries accepted by the API, the analysis
//! results decoded from the generative-text endpoint, the request envelope
//! sent to that endpoint and the HTTP response bodies.

pub mod analysis;
pub mod api;
pub mod gemini;
pub mod logs;

pub use analysis::*;
pub use api::*;
pub use gemini::GenerateContentRequest;
pub use logs::*;
