// Common types shared across the crate

pub mod entity_ids;
pub mod errors;

pub use entity_ids::*;
pub use errors::{Result, VaultError};
