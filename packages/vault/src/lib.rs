// Ephemeral Vault - post retention core
//
// Scans posts and moves the ones older than the retention cutoff into the archive.
// Storage and the clock are injected through kernel traits so the scan stays deterministic in tests.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
