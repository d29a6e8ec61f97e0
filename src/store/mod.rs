//! Post storage subsystem.
//!
//! # Data Flow
//! ```text
//! façade (json_api / form_api)
//!     → PostStore operation (list / get / create / update / replace / delete)
//!     → single lock over { posts: Vec<Post>, last_id }
//!     → Post | StoreError::NotFound
//! ```
//!
//! # Design Decisions
//! - Posts are kept in a `Vec` so listing follows insertion order
//! - Lookup by id is a linear scan; the collection is small and in memory
//! - Ids come from a monotonic counter and are never reused
//! - The store has no notion of HTTP; status mapping lives in the façades

pub mod error;
pub mod memory;
pub mod post;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use memory::PostStore;
pub use post::{NewPost, Post, PostId, PostPatch};
