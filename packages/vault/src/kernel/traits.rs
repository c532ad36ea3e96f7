// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no retention logic.
// The archive sweep lives in domains/posts/activities and works against these traits.
//
// Naming convention: Base* for trait names (e.g., BasePostStore, BaseClock)

use chrono::{DateTime, Utc};

use crate::common::{PostId, Result};
use crate::domains::posts::models::{Post, PostStatus};

// =============================================================================
// Post Store Trait (Infrastructure - stand-in for a real datastore)
// =============================================================================

pub trait BasePostStore {
    /// All posts, in stored order
    fn fetch_all(&self) -> Result<Vec<Post>>;

    /// Change the status of one post.
    ///
    /// Implementations must reject transitions other than public -> archived
    /// and treat re-applying the current status as a no-op.
    fn update_status(&mut self, id: PostId, status: PostStatus) -> Result<()>;
}

// =============================================================================
// Clock Trait (Infrastructure - source of "now")
// =============================================================================

pub trait BaseClock {
    fn now(&self) -> DateTime<Utc>;
}
