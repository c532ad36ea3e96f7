//! Test harness with a pinned clock.
//!
//! Every test gets the same "now" so post ages are exact and boundary cases
//! (a post exactly 24h old) are reproducible.

use chrono::{DateTime, TimeZone, Utc};
use test_context::TestContext;
use vault_core::domains::posts::{ArchiveScanner, InMemoryPostStore, Post};
use vault_core::kernel::FixedClock;

/// Test harness that owns the clock used for every scan.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(VaultHarness)]
/// #[test]
/// fn my_test(ctx: &mut VaultHarness) {
///     let mut scanner = ctx.scanner(vec![], false);
///     scanner.scan_and_archive(&ctx.clock).unwrap();
/// }
/// ```
pub struct VaultHarness {
    pub now: DateTime<Utc>,
    pub clock: FixedClock,
}

impl TestContext for VaultHarness {
    fn setup() -> Self {
        // Respect RUST_LOG; try_init() because every test sets up a harness.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let now = Utc.with_ymd_and_hms(2024, 6, 2, 18, 0, 0).unwrap();

        Self {
            now,
            clock: FixedClock::new(now),
        }
    }

    fn teardown(self) {}
}

impl VaultHarness {
    /// Scanner over an in-memory store holding `posts`
    pub fn scanner(&self, posts: Vec<Post>, dry_run: bool) -> ArchiveScanner<InMemoryPostStore> {
        ArchiveScanner::with_store(InMemoryPostStore::new(posts), dry_run)
    }
}
