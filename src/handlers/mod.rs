//! HTTP request handlers for API endpoints.

pub mod analyze;
pub mod convert;
pub mod health;
pub mod metrics;
pub mod openapi;
pub mod upload;
pub mod version;

pub use analyze::*;
pub use convert::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use upload::*;
pub use version::*;
