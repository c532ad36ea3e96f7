use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::common::{PostId, Result, VaultError};
use crate::domains::posts::models::{Post, PostStatus};
use crate::kernel::BasePostStore;

/// Ordered, process-local post collection. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Vec<Post>,
}

impl InMemoryPostStore {
    /// Callers guarantee unique ids; use `try_new` for untrusted input.
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Updates address posts by id, so ids must be unique.
    pub fn try_new(posts: Vec<Post>) -> Result<Self> {
        match first_duplicate_id(&posts) {
            Some(id) => Err(VaultError::DuplicatePostId(id)),
            None => Ok(Self::new(posts)),
        }
    }

    /// Demo data: one post from two days ago, one from exactly a day ago, one from `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            Post::new(1, "Old Sunday post", now - Duration::hours(48)),
            Post::new(2, "Recent post", now - Duration::hours(24)),
            Post::new(3, "Just now", now),
        ])
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}

/// First id that appears more than once, in stored order
pub fn first_duplicate_id(posts: &[Post]) -> Option<PostId> {
    let mut seen = HashSet::new();
    posts.iter().map(|p| p.id).find(|id| !seen.insert(*id))
}

impl BasePostStore for InMemoryPostStore {
    fn fetch_all(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    fn update_status(&mut self, id: PostId, status: PostStatus) -> Result<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(VaultError::PostNotFound(id))?;

        if post.status == status {
            return Ok(());
        }
        if !post.status.can_transition_to(status) {
            return Err(VaultError::InvalidTransition {
                id,
                from: post.status,
                to: status,
            });
        }

        post.status = status;
        Ok(())
    }
}
