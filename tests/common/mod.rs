//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use portfolio_backend::config::PortfolioConfig;
use portfolio_backend::lifecycle::Shutdown;
use portfolio_backend::store::{parse_document, PortfolioStore};
use portfolio_backend::HttpServer;

/// A complete document carrying every section the routes reference.
#[allow(dead_code)]
pub fn sample_document() -> Value {
    json!({
        "personal": {
            "name": "Jane Doe",
            "title": "Software Engineer",
            "email": "jane@example.com"
        },
        "education": [
            { "type": "degree", "title": "B.Sc. Computer Science" }
        ],
        "skills": {
            "technical": [{ "name": "Rust", "percentage": 85 }],
            "professional": [{ "name": "Communication", "percentage": 90 }]
        },
        "projects": [
            { "id": 1, "title": "Recipe Box", "technologies": ["Rust"] }
        ],
        "basicProjects": [
            { "title": "dotfiles", "githubLink": "https://github.com/janedoe/dotfiles" }
        ],
        "blogs": [
            { "id": 1, "title": "First post", "readTime": "6 min" }
        ],
        "blogPosts": {
            "1": { "title": "First post", "content": "Hello" },
            "3": { "title": "Third post", "content": "Still here" }
        },
        "social": {
            "github": "https://github.com/janedoe"
        }
    })
}

#[allow(dead_code)]
pub fn sample_store() -> PortfolioStore {
    parse_document(sample_document()).unwrap()
}

/// Spawn the server on an ephemeral port.
///
/// Returns the base URL and the shutdown handle; trigger it at the end of
/// the test to stop the background task.
pub async fn spawn_server(config: PortfolioConfig, store: PortfolioStore) -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&config, store).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{addr}"), shutdown)
}

/// Start a mock messaging webhook answering with a fixed status, counting
/// the submissions it receives.
#[allow(dead_code)]
pub async fn start_mock_webhook(status: StatusCode) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().route(
        "/hook",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                status
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}/hook"), hits)
}
