//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Load document → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or broadcast trigger → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, traffic is never served from a
//!   partially initialized process
//! - Tests drive shutdown through the same broadcast channel as signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
