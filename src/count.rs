//! Like counter value type.
//!
//! Browser storage only holds text, so counts cross the storage boundary as
//! canonical decimal strings. Parsing is lenient: anything that is not a
//! plain unsigned integer reads as zero.

#[cfg(test)]
#[path = "count_test.rs"]
mod count_test;

use std::fmt;

/// Number of likes recorded for one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikeCount(u64);

impl LikeCount {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a stored value. Absent, empty, negative, fractional or
    /// otherwise malformed text yields zero.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return Self::ZERO;
        };
        text.trim().parse::<u64>().map_or(Self::ZERO, Self)
    }

    /// The count after one more like. Saturates instead of wrapping.
    #[must_use]
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for LikeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
