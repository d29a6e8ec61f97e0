//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both post APIs
//! - Wire up middleware (tracing, request ID, limits, timeout, metrics)
//! - Mount the static asset directory as fallback
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::MakeRequestUuidV4;
use crate::observability::metrics;
use crate::routing::{form_api, json_api};
use crate::store::PostStore;
use crate::views::{HtmlRenderer, ViewRenderer};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub views: Arc<dyn ViewRenderer>,
}

impl AppState {
    pub fn new(store: Arc<PostStore>, views: Arc<dyn ViewRenderer>) -> Self {
        Self { store, views }
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let mut router = Router::new()
        .merge(json_api::routes())
        .merge(form_api::routes());

    if config.assets.enabled {
        router = router.fallback_service(ServeDir::new(&config.assets.static_dir));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
}

/// HTTP server for the post repository.
pub struct HttpServer {
    router: Router,
    store: Arc<PostStore>,
}

impl HttpServer {
    /// Create a server with a store built from the configuration and the
    /// built-in HTML views.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.store.seed {
            PostStore::seeded()
        } else {
            PostStore::new()
        };
        Self::with_parts(config, Arc::new(store), Arc::new(HtmlRenderer::new()))
    }

    /// Create a server around an existing store and renderer.
    pub fn with_parts(
        config: ServerConfig,
        store: Arc<PostStore>,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        let state = AppState::new(store.clone(), views);
        let router = build_router(&config, state);
        Self { router, store }
    }

    /// The fully layered router (useful for testing).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> Arc<PostStore> {
        self.store.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            posts = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
