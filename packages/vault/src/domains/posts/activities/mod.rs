//! Post activities - business logic functions.

pub mod archive_stale_posts;

pub use archive_stale_posts::{
    format_age, ArchiveEntry, ArchiveOutcome, ArchiveReport, ArchiveScanner, ARCHIVE_CUTOFF_HOURS,
};
