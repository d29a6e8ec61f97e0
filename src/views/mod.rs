//! View rendering.
//!
//! The form API hands a view name plus a JSON data context to a
//! [`ViewRenderer`]; it never builds markup itself. [`HtmlRenderer`] is the
//! built-in implementation.

pub mod html;

use thiserror::Error;

pub use html::HtmlRenderer;

/// Listing of all posts. Context: `{"posts": [Post]}`.
pub const INDEX_VIEW: &str = "index";

/// New/edit form. Context: `{"heading", "submit", "post"?}`.
pub const MODIFY_VIEW: &str = "modify";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("invalid context for view {view}: {reason}")]
    InvalidContext { view: String, reason: String },
}

/// Turns a named view and its data into a response body.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &serde_json::Value) -> Result<String, ViewError>;
}
