//! Order handling subsystem.
//!
//! # Data Flow
//! ```text
//! raw JSON payload
//!     → types.rs (OrderPayload, untyped boundary shape)
//!     → validate.rs (required-field checks)
//!     → OrderRequest (validated, owned)
//!     → format.rs (message text + wa.me deep link)
//!     → OrderSummary (immutable)
//! ```
//!
//! # Design Decisions
//! - Validation and formatting are pure functions; no shared state
//! - The WhatsApp recipient is injected by the caller, never a literal here
//! - Missing optional cart fields fall back to documented defaults

pub mod format;
pub mod types;
pub mod validate;

pub use format::format_summary;
pub use types::{CartItem, OrderRequest, OrderSummary, OrderValidationError};
pub use validate::validate;
