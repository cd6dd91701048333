//! Storage backend implementations.
//!
//! This module provides concrete implementations of the store traits
//! defined in `staffcost_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local tables, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p staffcost --no-default-features --features sqlite,memory
//! ```

#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p staffcost --features sqlite"
);

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
