//! In-memory storage backend.
//!
//! Stores all rows in maps wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffcost::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Hand the store to the repositories...
//! ```

mod store;

pub use store::InMemoryStore;
