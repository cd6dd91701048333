//! Redis cache backend implementation.
//!
//! Provides a cache shared by every service instance. Connection and
//! response timeouts bound each call.

mod cache;
mod error;

pub use cache::RedisCache;
