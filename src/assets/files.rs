//! File loading and response building for static assets.

use std::path::Path;

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use tokio::fs;

use crate::assets::mime::content_type_for;
use crate::config::AssetsConfig;
use crate::http::error::ApiError;

/// Serve the CV document as an attachment download.
pub async fn serve_cv(config: &AssetsConfig) -> Result<Response, ApiError> {
    let bytes = fs::read(&config.cv_path)
        .await
        .map_err(|_| ApiError::NotFound("CV file not found".to_string()))?;

    let extension = config.cv_path.extension().and_then(|e| e.to_str());
    let disposition = format!("attachment; filename=\"{}\"", config.cv_download_name);
    let disposition = HeaderValue::try_from(disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(content_type_for(extension)),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Serve one image from the configured directory.
pub async fn serve_image(config: &AssetsConfig, filename: &str) -> Result<Response, ApiError> {
    if !is_safe_filename(filename) {
        return Err(ApiError::NotFound("Image not found".to_string()));
    }

    let path = config.images_dir.join(filename);
    let bytes = fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound("Image not found".to_string()))?;

    let extension = Path::new(filename).extension().and_then(|e| e.to_str());

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(content_type_for(extension)),
        )],
        bytes,
    )
        .into_response())
}

/// A single path segment with no traversal components.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_components_are_rejected() {
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename("../secret.txt"));
        assert!(!is_safe_filename("sub/photo.png"));
        assert!(!is_safe_filename("sub\\photo.png"));
    }

    #[test]
    fn plain_filenames_are_accepted() {
        assert!(is_safe_filename("photo.png"));
        assert!(is_safe_filename("profile.portrait.jpeg"));
    }
}
