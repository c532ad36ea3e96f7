// TestDependencies - mock implementations for testing
//
// Provides a pinned clock and a call-recording post store that can be injected
// into ArchiveScanner for tests.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

use super::{BaseClock, BasePostStore};
use crate::common::{PostId, Result, VaultError};
use crate::domains::posts::data::InMemoryPostStore;
use crate::domains::posts::models::{Post, PostStatus};

// =============================================================================
// Fixed Clock
// =============================================================================

/// Clock that always reports the same instant until moved explicitly
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl BaseClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

// =============================================================================
// Mock Post Store
// =============================================================================

/// In-memory store that records every `update_status` call
pub struct MockPostStore {
    inner: InMemoryPostStore,
    update_calls: Vec<(PostId, PostStatus)>,
    fail_updates: bool,
}

impl MockPostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            inner: InMemoryPostStore::new(posts),
            update_calls: Vec::new(),
            fail_updates: false,
        }
    }

    /// Make every `update_status` call fail with `PostNotFound`
    pub fn with_failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn update_calls(&self) -> &[(PostId, PostStatus)] {
        &self.update_calls
    }

    pub fn posts(&self) -> &[Post] {
        self.inner.posts()
    }
}

impl BasePostStore for MockPostStore {
    fn fetch_all(&self) -> Result<Vec<Post>> {
        self.inner.fetch_all()
    }

    fn update_status(&mut self, id: PostId, status: PostStatus) -> Result<()> {
        self.update_calls.push((id, status));
        if self.fail_updates {
            return Err(VaultError::PostNotFound(id));
        }
        self.inner.update_status(id, status)
    }
}
