use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{PostId, Result, VaultError};

/// Post - a piece of published content subject to the retention sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub published: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    /// Create a public post
    pub fn new(id: i64, content: impl Into<String>, published: DateTime<Utc>) -> Self {
        Self {
            id: PostId::new(id),
            content: content.into(),
            published,
            status: PostStatus::Public,
        }
    }

    pub fn is_public(&self) -> bool {
        self.status == PostStatus::Public
    }

    /// Time elapsed between publication and `now` (negative if published in the future)
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.published)
    }
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Post visibility status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Public,
    Archived,
}

impl PostStatus {
    /// Only public -> archived is allowed; archiving is one-way.
    pub fn can_transition_to(self, next: PostStatus) -> bool {
        matches!((self, next), (PostStatus::Public, PostStatus::Archived))
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Public => write!(f, "public"),
            PostStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "public" => Ok(PostStatus::Public),
            "archived" => Ok(PostStatus::Archived),
            _ => Err(VaultError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("public".parse::<PostStatus>().unwrap(), PostStatus::Public);
        assert_eq!("archived".parse::<PostStatus>().unwrap(), PostStatus::Archived);
        assert_eq!(PostStatus::Archived.to_string(), "archived");

        let err = "deleted".parse::<PostStatus>().unwrap_err();
        assert_eq!(err, VaultError::InvalidStatus("deleted".to_string()));
    }

    #[test]
    fn test_only_public_to_archived_is_allowed() {
        assert!(PostStatus::Public.can_transition_to(PostStatus::Archived));
        assert!(!PostStatus::Archived.can_transition_to(PostStatus::Public));
        assert!(!PostStatus::Public.can_transition_to(PostStatus::Public));
        assert!(!PostStatus::Archived.can_transition_to(PostStatus::Archived));
    }

    #[test]
    fn test_age_at() {
        let published = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let post = Post::new(1, "hello", published);

        assert!(post.is_public());
        assert_eq!(post.age_at(published + Duration::hours(30)), Duration::hours(30));
        assert_eq!(post.age_at(published - Duration::hours(1)), Duration::hours(-1));
    }

    #[test]
    fn test_post_json_shape() {
        let published = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let post = Post::new(3, "Just now", published);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["status"], "public");
        assert_eq!(value["published"], "2024-06-01T12:00:00Z");
    }
}
