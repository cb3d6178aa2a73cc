//! Error types for the s4lru library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when the segment lists and the key index
//!   disagree (`check_invariants`). Names the offending segment when there is one.
//! - [`ConfigError`]: Returned when a capacity cannot be split across four
//!   segments, or is too large to reserve slot storage for.
//!
//! Lookups never fail: a missing key is reported as `None`, not as an error.
//!
//! ## Example Usage
//!
//! ```
//! use s4lru::error::ConfigError;
//! use s4lru::policy::s4lru::S4lruCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<S4lruCache<String, i32>, ConfigError> = S4lruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! // Fewer than four slots cannot be split across four segments
//! let bad = S4lruCache::<String, i32>::try_new(3);
//! assert_eq!(
//!     bad.unwrap_err(),
//!     ConfigError::CapacityTooSmall { capacity: 3, min: 4 }
//! );
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`S4lruCache::check_invariants`](crate::policy::s4lru::S4lruCache::check_invariants).
/// Carries the segment where the violation was found, if it is local to one,
/// and a description of what disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    segment: Option<usize>,
    detail: String,
}

impl InvariantError {
    /// Creates an error that is not tied to a single segment.
    #[inline]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            segment: None,
            detail: detail.into(),
        }
    }

    /// Creates an error found while walking segment `segment`.
    #[inline]
    pub fn in_segment(segment: usize, detail: impl Into<String>) -> Self {
        Self {
            segment: Some(segment),
            detail: detail.into(),
        }
    }

    /// Segment index (`0..=3`) the violation was found in.
    #[inline]
    pub fn segment(&self) -> Option<usize> {
        self.segment
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.segment {
            Some(segment) => write!(f, "segment {}: {}", segment, self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`S4lruCache::try_new`](crate::policy::s4lru::S4lruCache::try_new)
/// and [`S4lruBuilder::try_build`](crate::builder::S4lruBuilder::try_build).
///
/// # Example
///
/// ```
/// use s4lru::error::ConfigError;
/// use s4lru::policy::s4lru::S4lruCache;
///
/// let err = S4lruCache::<u64, u64>::try_new(0).unwrap_err();
/// assert_eq!(err.capacity(), 0);
/// assert!(err.to_string().contains("capacity"));
///
/// let err = S4lruCache::<u64, u64>::try_new(usize::MAX).unwrap_err();
/// assert!(matches!(err, ConfigError::CapacityTooLarge { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Fewer slots than segments; every segment needs at least one.
    CapacityTooSmall { capacity: usize, min: usize },
    /// Slot storage or the key index for `capacity` entries could not be reserved.
    CapacityTooLarge { capacity: usize },
}

impl ConfigError {
    /// The rejected capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        match *self {
            ConfigError::CapacityTooSmall { capacity, .. } => capacity,
            ConfigError::CapacityTooLarge { capacity } => capacity,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CapacityTooSmall { capacity, min } => write!(
                f,
                "cache capacity must be at least {} (one slot per segment), got {}",
                min, capacity
            ),
            ConfigError::CapacityTooLarge { capacity } => write!(
                f,
                "cache capacity {} is too large to reserve slot storage",
                capacity
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_names_segment() {
        let err = InvariantError::in_segment(2, "holds 3 entries, capacity 2");
        assert_eq!(err.to_string(), "segment 2: holds 3 entries, capacity 2");
        assert_eq!(err.segment(), Some(2));
        assert_eq!(err.detail(), "holds 3 entries, capacity 2");
    }

    #[test]
    fn invariant_without_segment_shows_detail_only() {
        let err = InvariantError::new("index holds 3 keys but segments link 2 entries");
        assert_eq!(err.segment(), None);
        assert_eq!(
            err.to_string(),
            "index holds 3 keys but segments link 2 entries"
        );
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_too_small_reports_minimum() {
        let err = ConfigError::CapacityTooSmall {
            capacity: 2,
            min: 4,
        };
        assert_eq!(
            err.to_string(),
            "cache capacity must be at least 4 (one slot per segment), got 2"
        );
        assert_eq!(err.capacity(), 2);
    }

    #[test]
    fn config_too_large_reports_capacity() {
        let err = ConfigError::CapacityTooLarge { capacity: 99 };
        assert!(err.to_string().contains("99"));
        assert_eq!(err.capacity(), 99);
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::CapacityTooLarge { capacity: 1 };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
