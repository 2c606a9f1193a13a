//! Full-page views outside the file browser.
//!
//! Components:
//! - [`IndexPage`] - Landing page
//! - [`LoginPage`] / [`RegisterPage`] - Auth forms
//! - [`MaintenancePage`] - Shown while the backend is unreachable
//! - [`NotFoundPage`] - Unknown route

mod error;
mod index;
mod login;
mod maintenance;
mod register;

pub use error::NotFoundPage;
pub use index::IndexPage;
pub use login::LoginPage;
pub use maintenance::MaintenancePage;
pub use register::RegisterPage;
