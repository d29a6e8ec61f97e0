//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign x-request-id)
//!     → routing (json_api / form_api, or static fallback)
//!     → response.rs (store errors → status + JSON message)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, PostFields, X_REQUEST_ID};
pub use response::{ApiError, Message};
pub use server::{build_router, AppState, HttpServer};
