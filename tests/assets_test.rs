//! End-to-end tests for static asset routes.

mod common;

use portfolio_backend::config::PortfolioConfig;
use serde_json::Value;

#[tokio::test]
async fn cv_downloads_as_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let cv_path = dir.path().join("cv.pdf");
    std::fs::write(&cv_path, b"%PDF-1.4 placeholder").unwrap();

    let mut config = PortfolioConfig::default();
    config.assets.cv_path = cv_path;
    config.assets.cv_download_name = "Jane_Doe_CV.pdf".to_string();

    let (base, shutdown) = common::spawn_server(config, common::sample_store()).await;

    let res = reqwest::get(format!("{base}/cv")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );
    assert_eq!(
        res.headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"Jane_Doe_CV.pdf\"")
    );
    assert_eq!(res.bytes().await.unwrap().as_ref(), b"%PDF-1.4 placeholder");

    shutdown.trigger();
}

#[tokio::test]
async fn missing_cv_is_a_404() {
    let mut config = PortfolioConfig::default();
    config.assets.cv_path = "/nonexistent/cv.pdf".into();

    let (base, shutdown) = common::spawn_server(config, common::sample_store()).await;

    let res = reqwest::get(format!("{base}/cv")).await.unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "CV file not found");

    shutdown.trigger();
}

#[tokio::test]
async fn images_are_served_with_their_content_type() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("photo.png"), b"not a real png").unwrap();

    let mut config = PortfolioConfig::default();
    config.assets.images_dir = dir.path().to_path_buf();

    let (base, shutdown) = common::spawn_server(config, common::sample_store()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base}/images/photo.png"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(res.bytes().await.unwrap().as_ref(), b"not a real png");

    let res = client
        .get(format!("{base}/images/missing.png"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn path_traversal_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    // A file outside the images directory that traversal would reach.
    std::fs::write(dir.path().join("secret.txt"), b"keep out").unwrap();

    let mut config = PortfolioConfig::default();
    config.assets.images_dir = images;

    let (base, shutdown) = common::spawn_server(config, common::sample_store()).await;

    let res = reqwest::get(format!("{base}/images/..%2Fsecret.txt"))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}
