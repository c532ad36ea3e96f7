//! JSON seed files for the in-memory store.
//!
//! Seed files look like:
//!
//! ```json
//! {
//!   "posts": [
//!     { "id": 1, "content": "Old Sunday post", "published": "2024-06-01T12:00:00Z", "status": "public" }
//!   ]
//! }
//! ```
//!
//! `status` may be omitted and defaults to `public`. Ids must be unique. The
//! file is only read; archiving never writes back to it.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

use super::in_memory::first_duplicate_id;
use super::InMemoryPostStore;
use crate::common::PostId;
use crate::domains::posts::models::{Post, PostStatus};

#[derive(Debug, Deserialize)]
struct SeedData {
    posts: Vec<PostInput>,
}

#[derive(Debug, Deserialize)]
struct PostInput {
    id: PostId,
    content: String,
    published: DateTime<Utc>,
    #[serde(default = "default_status")]
    status: PostStatus,
}

fn default_status() -> PostStatus {
    PostStatus::Public
}

impl From<PostInput> for Post {
    fn from(input: PostInput) -> Self {
        Post {
            id: input.id,
            content: input.content,
            published: input.published,
            status: input.status,
        }
    }
}

/// Parse seed posts from a JSON document
pub fn parse_seed_posts(json: &str) -> Result<Vec<Post>> {
    let seed_data: SeedData = serde_json::from_str(json).context("Failed to parse seed data")?;
    let posts: Vec<Post> = seed_data.posts.into_iter().map(Post::from).collect();

    if let Some(id) = first_duplicate_id(&posts) {
        bail!("Duplicate post id {} in seed data", id);
    }

    Ok(posts)
}

/// Read and parse seed posts from a file
pub fn load_seed_posts(path: &Path) -> Result<Vec<Post>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed_posts(&json).with_context(|| format!("Invalid seed file {}", path.display()))
}

impl InMemoryPostStore {
    /// Build a store from a JSON seed file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let posts = load_seed_posts(path)?;
        tracing::info!(count = posts.len(), path = %path.display(), "Loaded seed posts");
        Ok(Self::try_new(posts)?)
    }
}
