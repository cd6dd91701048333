//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `Cache` trait
//! defined in `staffcost_core::cache`, plus the [`FailSafeCache`] wrapper the
//! repositories use. The backend is selected at compile time via feature
//! flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory LRU cache using tokio synchronization primitives
//! - `redis`: Redis cache using the redis crate
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p staffcost --features memory"
);

mod failsafe;

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use failsafe::FailSafeCache;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
