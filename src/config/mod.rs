//! Configuration structures and environment loading.

pub mod app;

pub use app::*;
