//! Contact-form forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/contact (JSON body)
//!     → ContactForm (deserialize, absent fields default to empty)
//!     → missing_fields() (reject incomplete submissions with 400)
//!     → forwarder.rs (format + POST to the messaging webhook)
//! ```
//!
//! # Design Decisions
//! - One reqwest client built at startup, reused for every submission
//! - Bounded connect and request timeouts; the upstream gets one attempt
//! - No retries, no partial-failure semantics

pub mod forwarder;

pub use forwarder::{ContactForm, ContactForwarder, ForwardError};
