//! Static asset serving.
//!
//! # Data Flow
//! ```text
//! GET /cv              → files.rs (read configured file, attachment headers)
//! GET /images/{name}   → files.rs (sanitize name, read from images dir)
//!                      → mime.rs (content type from extension)
//! ```
//!
//! # Design Decisions
//! - Filenames are single path segments; traversal components are treated
//!   as not found rather than producing a distinct error
//! - Files are read per request; the asset set is small and rarely hit

pub mod files;
pub mod mime;

pub use files::{serve_cv, serve_image};
