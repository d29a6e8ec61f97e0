//! In-memory post repository with a JSON REST API and a form-driven
//! HTML interface sharing one store.

// Core
pub mod store;
pub mod routing;
pub mod views;

// Transport
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{NewPost, Post, PostId, PostPatch, PostStore, StoreError};
