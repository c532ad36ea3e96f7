//! Archive public posts older than the retention cutoff.
//!
//! One linear pass over the store in stored order. Public posts whose age is
//! strictly greater than 24 hours are archived; in dry-run mode the action is
//! only reported. Archived posts are never touched again, so repeated sweeps
//! converge after the first.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::common::{PostId, Result};
use crate::domains::posts::data::InMemoryPostStore;
use crate::domains::posts::models::{Post, PostStatus};
use crate::kernel::{BaseClock, BasePostStore, SystemClock};

/// Posts become eligible for archiving once older than this many hours.
pub const ARCHIVE_CUTOFF_HOURS: i64 = 24;

/// What the sweep did with a single post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveOutcome {
    /// Post was public and past the cutoff; status is now archived
    Archived,
    /// Dry-run: post would have been archived
    WouldArchive,
    /// Post is public and within the cutoff
    Retained,
    /// Post was already archived before the sweep
    AlreadyArchived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub post_id: PostId,
    pub age_seconds: i64,
    pub outcome: ArchiveOutcome,
}

/// Per-post outcomes of one sweep, in stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveReport {
    pub dry_run: bool,
    pub scanned_at: DateTime<Utc>,
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveReport {
    fn new(dry_run: bool, scanned_at: DateTime<Utc>) -> Self {
        Self {
            dry_run,
            scanned_at,
            entries: Vec::new(),
        }
    }

    pub fn count(&self, outcome: ArchiveOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn ids_with(&self, outcome: ArchiveOutcome) -> Vec<PostId> {
        self.entries
            .iter()
            .filter(|e| e.outcome == outcome)
            .map(|e| e.post_id)
            .collect()
    }

    pub fn archived(&self) -> usize {
        self.count(ArchiveOutcome::Archived)
    }

    pub fn would_archive(&self) -> usize {
        self.count(ArchiveOutcome::WouldArchive)
    }
}

/// Applies the age-based retention policy to a post store it owns exclusively
pub struct ArchiveScanner<S = InMemoryPostStore> {
    store: S,
    dry_run: bool,
}

impl ArchiveScanner<InMemoryPostStore> {
    /// Scanner over the built-in sample posts, aged against the system clock
    pub fn new(dry_run: bool) -> Self {
        Self::with_store(InMemoryPostStore::sample(SystemClock.now()), dry_run)
    }
}

impl<S: BasePostStore> ArchiveScanner<S> {
    pub fn with_store(store: S, dry_run: bool) -> Self {
        Self { store, dry_run }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Sweep the store once, archiving public posts older than the cutoff.
    ///
    /// `now` is read from `clock` once at the start so every post is aged
    /// against the same instant.
    pub fn scan_and_archive(&mut self, clock: &dyn BaseClock) -> Result<ArchiveReport> {
        info!(dry_run = self.dry_run, "Starting archive scan");

        let cutoff = Duration::hours(ARCHIVE_CUTOFF_HOURS);
        let now = clock.now();
        let mut report = ArchiveReport::new(self.dry_run, now);

        for post in self.store.fetch_all()? {
            let age = post.age_at(now);

            let outcome = if post.status == PostStatus::Archived {
                ArchiveOutcome::AlreadyArchived
            } else if age > cutoff {
                self.archive_one(&post, age)?
            } else {
                debug!(post_id = %post.id, age = %format_age(age), "Post within retention window");
                ArchiveOutcome::Retained
            };

            report.entries.push(ArchiveEntry {
                post_id: post.id,
                age_seconds: age.num_seconds(),
                outcome,
            });
        }

        info!(
            scanned = report.entries.len(),
            archived = report.archived(),
            would_archive = report.would_archive(),
            "Archive scan complete"
        );

        Ok(report)
    }

    // The only place a post's status changes.
    fn archive_one(&mut self, post: &Post, age: Duration) -> Result<ArchiveOutcome> {
        if self.dry_run {
            info!(
                post_id = %post.id,
                age = %format_age(age),
                content = %post.content,
                "[DRY-RUN] Would archive post"
            );
            return Ok(ArchiveOutcome::WouldArchive);
        }

        self.store.update_status(post.id, PostStatus::Archived)?;
        info!(post_id = %post.id, "[ARCHIVED] Post moved to private vault");

        Ok(ArchiveOutcome::Archived)
    }
}

/// Render an age as `<h>h<m>m<s>s`, truncated to whole seconds.
pub fn format_age(age: Duration) -> String {
    let total = age.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    format!(
        "{}{}h{}m{}s",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
