//! Document loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use serde_json::Value;

use crate::store::document::{PortfolioStore, Section};

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document root must be a JSON object")]
    NotAnObject,

    #[error("document is missing required section '{0}'")]
    MissingSection(&'static str),
}

/// Load the portfolio document from a JSON file.
///
/// Any failure here is fatal: the caller must not serve traffic without a
/// complete document.
pub fn load_document(path: &Path) -> Result<PortfolioStore, DocumentError> {
    let raw = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw)?;
    parse_document(value)
}

/// Build a store from an already-parsed JSON value, checking that every
/// section a route depends on is present.
pub fn parse_document(value: Value) -> Result<PortfolioStore, DocumentError> {
    let Value::Object(sections) = value else {
        return Err(DocumentError::NotAnObject);
    };

    for section in Section::REQUIRED {
        if !sections.contains_key(section.key()) {
            return Err(DocumentError::MissingSection(section.key()));
        }
    }

    Ok(PortfolioStore::new(sections))
}
