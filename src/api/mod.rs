//! REST client for the storage backend.
//!
//! - [`error`] - tagged error taxonomy mapped from HTTP status codes
//! - [`http`] - credentialed fetch plumbing with the liveness gate
//! - [`auth`] - session check, sign-in/up/out
//! - [`storage`] - folder listing, search, move, delete, upload

pub mod auth;
pub mod error;
pub mod http;
pub mod storage;

pub use error::{ApiError, FolderRecovery};
