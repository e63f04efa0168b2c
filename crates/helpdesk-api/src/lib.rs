//! Helpdesk API crate - axum HTTP server and route handlers.
//!
//! Exposes session initialization, chat messages, history, escalation,
//! summaries, the FAQ listing, and a health check as JSON endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
