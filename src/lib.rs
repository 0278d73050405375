//! Personal-portfolio backend.
//!
//! A small HTTP service that loads a static JSON document at startup and
//! serves its sections over fixed routes, forwards contact-form submissions
//! to a messaging webhook, and serves a handful of static assets.

// Core subsystems
pub mod config;
pub mod http;
pub mod store;

// Features
pub mod assets;
pub mod contact;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::PortfolioConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::PortfolioStore;
