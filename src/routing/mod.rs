//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, body)
//!     → json_api.rs  (/posts...)      → PostStore → JSON + status
//!     → form_api.rs  (/, /new, /edit, /api/posts...) → PostStore → redirect | view
//!     → static fallback (see http::server)
//! ```
//!
//! # Design Decisions
//! - The two façades never call each other; each depends only on `PostStore`
//! - Path ids are taken as raw strings and parsed with `PostId::from_path`,
//!   so malformed ids become "not found" instead of a rejection
//! - JSON updates merge non-empty fields; form updates overwrite all fields

pub mod form_api;
pub mod json_api;
