//! s4lru: a four-segment LRU cache with promotion on hit.
//!
//! Entries enter the coldest segment and climb one segment per hit; an entry
//! displaced from a full segment drops one level, and only the coldest
//! segment evicts. See [`policy::s4lru`] for the algorithm and
//! [`builder::S4lruBuilder`] for construction options.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
