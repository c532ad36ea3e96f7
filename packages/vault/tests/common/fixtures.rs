//! Test fixtures for creating posts at known ages.

use chrono::{DateTime, Duration, Utc};
use vault_core::domains::posts::{Post, PostStatus};

/// Public post published `age` before `now`
pub fn post_aged(id: i64, age: Duration, now: DateTime<Utc>) -> Post {
    Post::new(id, format!("Post #{}", id), now - age)
}

/// Archived post published `age` before `now`
pub fn archived_post_aged(id: i64, age: Duration, now: DateTime<Utc>) -> Post {
    let mut post = post_aged(id, age, now);
    post.status = PostStatus::Archived;
    post
}

/// Statuses in stored order
pub fn statuses(posts: &[Post]) -> Vec<PostStatus> {
    posts.iter().map(|p| p.status).collect()
}

/// Seed file body in the format `InMemoryPostStore::from_json_file` reads
pub fn seed_json(posts: &[Post]) -> String {
    serde_json::json!({ "posts": posts }).to_string()
}
