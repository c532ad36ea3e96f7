//! Typed ID definitions for domain entities.
//!
//! Posts are keyed by an integer assigned when the post is created. Wrapping it
//! keeps post ids from being mixed up with counts or offsets.
//!
//! # Example
//!
//! ```rust
//! use vault_core::common::PostId;
//!
//! let id = PostId::new(7);
//! assert_eq!(id.into_inner(), 7);
//! assert_eq!(id.to_string(), "7");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Typed ID for Post entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&PostId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: PostId = serde_json::from_str("42").unwrap();
        assert_eq!(id, PostId::from(42));
    }
}
