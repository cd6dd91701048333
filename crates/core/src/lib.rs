//! Functional core for staffcost.
//!
//! Pure data types, validation, the cache key scheme, the cost formula and
//! the storage/cache traits the service crate implements. Nothing in this
//! crate performs I/O.

pub mod cache;
pub mod costing;
pub mod staffing;
pub mod storage;
