//! Portfolio document store.
//!
//! # Data Flow
//! ```text
//! JSON file on disk
//!     → loader.rs (read, parse, check required sections)
//!     → PortfolioStore (immutable, shared via Arc)
//!     → section / blog-post accessors (read-only)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; never mutated by request handlers
//! - Fail fast: a missing or malformed document prevents serving traffic
//! - Sections are returned verbatim, no transformation or filtering
//! - Concurrent reads are safe because nothing is written after load

pub mod document;
pub mod loader;

pub use document::{PortfolioStore, Section};
pub use loader::{load_document, parse_document, DocumentError};
