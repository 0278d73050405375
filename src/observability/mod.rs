//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → stdout (tracing subscriber)
//!     → Prometheus scrape endpoint (optional, own bind address)
//! ```

pub mod logging;
pub mod metrics;
