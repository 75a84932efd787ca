//! HTTP API surface.

pub mod axum;
mod types;

pub use types::*;
