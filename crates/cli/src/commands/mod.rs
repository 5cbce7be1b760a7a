//! Command implementations.

pub mod snapshot;
