pub use crate::builder::S4lruBuilder;
pub use crate::ds::{SegmentList, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::S4lruMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::s4lru::ConcurrentS4lruCache;
pub use crate::policy::s4lru::{Level, S4lruCache};
#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};
