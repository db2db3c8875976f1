//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! request
//!     → server.rs (router + middleware: timeout, body limit,
//!       request ID, trace, CORS)
//!     → handlers.rs (endpoint logic, order validation/formatting)
//!     → error.rs (failures mapped to the uniform JSON envelope)
//! ```
//!
//! # Design Decisions
//! - Errors are values mapped to status codes at the handler boundary;
//!   no panics as control flow
//! - Every error response uses the same {status:"error", message} shape

pub mod error;
pub mod handlers;
pub mod server;

pub use server::HttpServer;
