//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - Main browser view (header, list, path bar, upload zone)
//! - [`FileList`] - List view of files and folders
//! - [`PathBar`] - Breadcrumb path bar with back navigation
//! - [`UploadZone`] - Drag-and-drop upload wrapper

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod header;
mod pathbar;
mod upload;

pub use browser::Browser;
pub use file_list::FileList;
pub use header::{BrowserHeader, SearchHeader};
pub use pathbar::PathBar;
pub use upload::UploadZone;
