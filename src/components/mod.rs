//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`browser`] - File browser UI (header, list, path bar, upload zone)
//! - [`pages`] - Full-page views (landing, auth forms, maintenance)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`notifications`] - Toast notification host

pub mod browser;
pub mod icons;
pub mod notifications;
pub mod pages;
pub mod router;

pub use router::AppRouter;
