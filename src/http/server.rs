//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (CORS, timeout, body limit, request ID, tracing, metrics)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AssetsConfig, PortfolioConfig};
use crate::contact::ContactForwarder;
use crate::http::handlers;
use crate::lifecycle::signals;
use crate::observability::metrics;
use crate::security::cors::cors_layer;
use crate::store::PortfolioStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortfolioStore>,
    pub forwarder: Option<ContactForwarder>,
    pub assets: AssetsConfig,
}

/// HTTP server for the portfolio backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and document.
    pub fn new(config: &PortfolioConfig, store: PortfolioStore) -> Result<Self, reqwest::Error> {
        let forwarder = if config.contact.enabled {
            Some(ContactForwarder::new(&config.contact)?)
        } else {
            None
        };

        let state = AppState {
            store: Arc::new(store),
            forwarder,
            assets: config.assets.clone(),
        };

        Ok(Self {
            router: Self::build_router(config, state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &PortfolioConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/api/personal", get(handlers::personal))
            .route("/api/education", get(handlers::education))
            .route("/api/skills", get(handlers::skills))
            .route("/api/projects", get(handlers::projects))
            .route("/api/basicProjects", get(handlers::basic_projects))
            .route("/api/blogs", get(handlers::blogs))
            .route("/api/blog/{id}", get(handlers::blog_post))
            .route("/api/blog-posts/{id}", get(handlers::blog_post))
            .route("/api/social", get(handlers::social))
            .route("/api/contact", post(handlers::contact))
            .route("/cv", get(handlers::cv))
            .route("/images/{filename}", get(handlers::image))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(middleware::from_fn(record_metrics));

        if config.cors.enabled {
            router = router.layer(cors_layer(&config.cors));
        }

        // Outermost first: request IDs are assigned before the trace span
        // opens so every log line and inner layer observes them.
        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on SIGINT/SIGTERM or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    () = signals::wait_for_signal() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record one counter increment and one latency observation per request,
/// labelled by the matched route template rather than the raw path.
async fn record_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string());

    let response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), &route, start);
    response
}
