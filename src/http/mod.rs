//! HTTP dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / propagate request ID)
//!     → cache.rs (memoized outcome for this registry generation)
//!     → routing (convention-based resolution against the registry)
//!     → response.rs (matched action or 404 diagnostics as JSON)
//! ```
//!
//! The server only reports what a path resolves to; invoking handlers is
//! left to the embedding application.

pub mod cache;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_of, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
