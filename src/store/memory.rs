//! In-memory post store.
//!
//! # Responsibilities
//! - Hold posts in insertion order
//! - Allocate ids from a counter that only moves forward
//! - Apply partial (patch) and total (replace) updates
//!
//! # Design Decisions
//! - One `Mutex` guards both the posts and the counter, so every operation
//!   performs its lookup and mutation under the same lock acquisition
//! - The lock is never held across an `.await`

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::observability::metrics;
use crate::store::error::{StoreError, StoreResult};
use crate::store::post::{NewPost, Post, PostId, PostPatch};
use crate::store::seed;

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<Post>,
    last_id: u64,
}

impl Inner {
    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    fn find_mut(&mut self, id: PostId) -> StoreResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// Process-wide post repository.
///
/// Shared between handlers behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct PostStore {
    inner: Mutex<Inner>,
}

impl PostStore {
    /// Create an empty store. The first allocated id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `posts`.
    ///
    /// The counter starts at the highest seeded id so new posts never collide
    /// with the seed.
    pub fn with_seed(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|post| post.id.get()).max().unwrap_or(0);
        metrics::record_store_size(posts.len());
        Self {
            inner: Mutex::new(Inner { posts, last_id }),
        }
    }

    /// Create a store holding the default seed posts.
    pub fn seeded() -> Self {
        Self::with_seed(seed::default_posts())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All posts in insertion order.
    pub fn list_all(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    pub fn get(&self, id: PostId) -> StoreResult<Post> {
        self.lock()
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new post stamped with the current time.
    pub fn create(&self, fields: NewPost) -> Post {
        let mut inner = self.lock();
        inner.last_id += 1;

        let post = Post {
            id: PostId::new(inner.last_id),
            title: fields.title,
            content: fields.content,
            author: fields.author,
            date: Utc::now(),
        };
        inner.posts.push(post.clone());

        tracing::debug!(post_id = %post.id, total = inner.posts.len(), "Post created");
        metrics::record_store_size(inner.posts.len());
        post
    }

    /// Merge `patch` into an existing post. Absent and empty values are
    /// ignored; `date` never changes.
    pub fn update(&self, id: PostId, patch: PostPatch) -> StoreResult<Post> {
        let mut inner = self.lock();
        let post = inner.find_mut(id)?;
        let unchanged = patch.is_empty();
        post.apply_patch(patch);

        tracing::debug!(post_id = %id, unchanged, "Post updated");
        Ok(post.clone())
    }

    /// Overwrite title, content and author of an existing post.
    pub fn replace(&self, id: PostId, fields: NewPost) -> StoreResult<Post> {
        let mut inner = self.lock();
        let post = inner.find_mut(id)?;
        post.replace_fields(fields);

        tracing::debug!(post_id = %id, "Post replaced");
        Ok(post.clone())
    }

    /// Remove a post, keeping the relative order of the rest.
    pub fn delete(&self, id: PostId) -> StoreResult<()> {
        let mut inner = self.lock();
        let index = inner.position(id).ok_or(StoreError::NotFound(id))?;
        inner.posts.remove(index);

        tracing::debug!(post_id = %id, total = inner.posts.len(), "Post deleted");
        metrics::record_store_size(inner.posts.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &PostStore) -> Vec<u64> {
        store.list_all().iter().map(|p| p.id.get()).collect()
    }

    fn titled(title: &str) -> NewPost {
        NewPost {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = PostStore::seeded();
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.create(titled("next")).id, PostId::new(4));
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = PostStore::new();
        assert!(store.is_empty());
        assert_eq!(store.create(NewPost::default()).id, PostId::new(1));
    }

    #[test]
    fn test_create_stores_fields_as_given() {
        let store = PostStore::new();
        let post = store.create(NewPost {
            title: Some(String::new()),
            content: None,
            author: Some("A".into()),
        });

        assert_eq!(post.title.as_deref(), Some(""));
        assert!(post.content.is_none());
        assert_eq!(store.get(post.id).unwrap(), post);
    }

    #[test]
    fn test_ids_never_reused() {
        let store = PostStore::seeded();
        let a = store.create(titled("a"));
        store.delete(a.id).unwrap();
        let b = store.create(titled("b"));
        assert!(b.id > a.id);

        store.delete(PostId::new(3)).unwrap();
        let c = store.create(titled("c"));
        assert!(c.id > b.id);
        assert_eq!(c.id, PostId::new(6));
    }

    #[test]
    fn test_partial_update() {
        let store = PostStore::seeded();
        let before = store.get(PostId::new(2)).unwrap();

        let after = store
            .update(
                PostId::new(2),
                PostPatch {
                    author: Some("New".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(after.author.as_deref(), Some("New"));
        assert_eq!(after.title, before.title);
        assert_eq!(after.content, before.content);
        assert_eq!(after.date, before.date);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let store = PostStore::seeded();
        let before = store.get(PostId::new(1)).unwrap();
        let after = store.update(PostId::new(1), PostPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_replace_overwrites_everything() {
        let store = PostStore::seeded();
        let before = store.get(PostId::new(1)).unwrap();

        let after = store
            .replace(
                PostId::new(1),
                NewPost {
                    title: Some("T".into()),
                    content: Some(String::new()),
                    author: None,
                },
            )
            .unwrap();

        assert_eq!(after.title.as_deref(), Some("T"));
        assert_eq!(after.content.as_deref(), Some(""));
        assert!(after.author.is_none());
        assert_eq!(after.date, before.date);
    }

    #[test]
    fn test_missing_ids() {
        let store = PostStore::seeded();
        let missing = PostId::new(99);

        assert_eq!(store.get(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(
            store.update(missing, PostPatch::default()),
            Err(StoreError::NotFound(missing))
        );
        assert_eq!(
            store.replace(missing, NewPost::default()),
            Err(StoreError::NotFound(missing))
        );
        assert_eq!(store.delete(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(store.get(PostId::NONE), Err(StoreError::NotFound(PostId::NONE)));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_preserves_order() {
        let store = PostStore::seeded();
        store.create(titled("four"));
        store.delete(PostId::new(2)).unwrap();
        assert_eq!(ids(&store), vec![1, 3, 4]);
        assert!(store.delete(PostId::new(2)).is_err());
    }

    #[test]
    fn test_reference_scenario() {
        let store = PostStore::seeded();

        let created = store.create(titled("T"));
        assert_eq!(created.id, PostId::new(4));

        let updated = store
            .update(
                PostId::new(2),
                PostPatch {
                    author: Some("New".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.author.as_deref(), Some("New"));
        assert_eq!(
            updated.title.as_deref(),
            Some("The Impact of Artificial Intelligence on Modern Businesses")
        );

        store.delete(PostId::new(1)).unwrap();
        assert_eq!(ids(&store), vec![2, 3, 4]);
        assert!(store.get(PostId::new(1)).is_err());
    }
}
