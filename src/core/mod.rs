//! Core client-side state machines, kept free of browser APIs so they can
//! be tested on the host.
//!
//! - [`health`] - backend liveness states and probe folding
//! - [`session`] - auth snapshot and the debounced revalidation policy
//! - [`navigation`] - folder path segments and the stale-response guard
//! - [`selection`] - selected ids and the cut buffer

pub mod health;
pub mod navigation;
pub mod selection;
pub mod session;
