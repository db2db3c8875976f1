//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/ctrl-c → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One one-shot channel between the signal listener and the server
//! - Tests trigger the coordinator directly instead of sending signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
