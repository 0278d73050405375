//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (origin allow-list, applied uniformly to every response)
//!     → body limit / timeout (configured in the http server layer stack)
//!     → Pass to routing
//! ```
//!
//! # Design Decisions
//! - The origin allow-list is static; changing it requires a restart
//! - Wildcard origin and credentials are mutually exclusive (validated)

pub mod cors;
