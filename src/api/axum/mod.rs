//! Axum bindings: routes, handlers, session extraction, and error mapping.

mod error;
pub mod handlers;
mod middleware;
mod routes;

pub use error::AppError;
pub use middleware::SessionUser;
pub use routes::{api_routes, AppState};
