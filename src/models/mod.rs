//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`StorageEntry`], [`EntryType`] - folder listing rows from the server
//! - [`User`] - the authenticated account
//! - [`Route`], [`Gate`] - hash-based navigation and auth/health gating

mod entry;
mod route;
mod user;

pub use entry::{EntryType, StorageEntry};
pub use route::{Gate, Route, resolve};
pub use user::User;
