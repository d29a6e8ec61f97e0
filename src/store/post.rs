//! Post record and the inputs accepted by the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a post.
///
/// Allocated ids start at 1. [`PostId::NONE`] is the sentinel produced for
/// path segments that do not hold a usable id; it never matches a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const NONE: PostId = PostId(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Parse an id out of a URL path segment.
    ///
    /// Follows integer-prefix parsing: leading whitespace and an optional
    /// sign are skipped, then the leading run of ASCII digits is read and
    /// anything after it is ignored (`"12abc"` is 12). Input with no digit
    /// prefix, a negative value, or a value that overflows `u64` yields
    /// [`PostId::NONE`].
    pub fn from_path(segment: &str) -> Self {
        let trimmed = segment.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];

        match digits.parse::<u64>() {
            Ok(0) => Self::NONE,
            Ok(_) if negative => Self::NONE,
            Ok(value) => Self(value),
            Err(_) => Self::NONE,
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored post.
///
/// Text fields are optional because creation stores whatever the client
/// supplied, including nothing. Absent fields are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub date: DateTime<Utc>,
}

/// Fields supplied when creating a post, or when replacing all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Fields supplied to a partial update.
///
/// Only values that are present and non-empty are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.content, &self.author]
            .iter()
            .all(|field| truthy(field).is_none())
    }
}

impl Post {
    /// Merge a patch into this post, skipping absent and empty values.
    pub(crate) fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(title) = truthy(&patch.title) {
            self.title = Some(title.to_owned());
        }
        if let Some(content) = truthy(&patch.content) {
            self.content = Some(content.to_owned());
        }
        if let Some(author) = truthy(&patch.author) {
            self.author = Some(author.to_owned());
        }
    }

    /// Overwrite all text fields, absent values included.
    pub(crate) fn replace_fields(&mut self, fields: NewPost) {
        self.title = fields.title;
        self.content = fields.content;
        self.author = fields.author;
    }
}

fn truthy(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
