//! Utility modules for DOM access, persisted client state, and formatting.

pub mod dom;
pub mod format;
pub mod persist;
