//! Posts domain - post records, their stores, and the retention sweep.

pub mod activities;
pub mod data;
pub mod models;

pub use activities::{ArchiveEntry, ArchiveOutcome, ArchiveReport, ArchiveScanner};
pub use data::InMemoryPostStore;
pub use models::{Post, PostStatus};
