//! Kernel module - infrastructure capabilities injected into the posts domain.

pub mod clock;
pub mod test_dependencies;
pub mod traits;

pub use clock::SystemClock;
pub use test_dependencies::{FixedClock, MockPostStore};
pub use traits::{BaseClock, BasePostStore};
