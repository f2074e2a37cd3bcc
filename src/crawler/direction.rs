use std::fmt;

/// Which way a crawl walks the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Starts at the seed index and counts down
    Descending,
    /// Starts just after the seed index and counts up
    Ascending,
}

impl Direction {
    /// The index after `index` in this direction, `None` on overflow
    ///
    /// # Examples
    ///
    /// ```
    /// use pget::Direction;
    ///
    /// assert_eq!(Direction::Descending.step(10), Some(9));
    /// assert_eq!(Direction::Ascending.step(10), Some(11));
    /// assert_eq!(Direction::Ascending.step(i64::MAX), None);
    /// ```
    pub fn step(&self, index: i64) -> Option<i64> {
        match self {
            Self::Descending => index.checked_sub(1),
            Self::Ascending => index.checked_add(1),
        }
    }

    /// The index before `index` in this direction
    pub fn retreat(&self, index: i64) -> i64 {
        match self {
            Self::Descending => index.saturating_add(1),
            Self::Ascending => index.saturating_sub(1),
        }
    }

    /// The first index this direction tries for a given seed index
    ///
    /// The descending crawl owns the seed itself; the ascending crawl starts
    /// one above it so the two never overlap.
    pub fn first_index(&self, seed: i64) -> Option<i64> {
        match self {
            Self::Descending => Some(seed),
            Self::Ascending => seed.checked_add(1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descending => write!(f, "descending"),
            Self::Ascending => write!(f, "ascending"),
        }
    }
}
