//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuClipboard as Paste,
        LuCloud as Brand, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuHouse as Home, LuImage as FileImage, LuLogOut as Logout, LuScissors as Cut,
        LuSearch as Search, LuTrash2 as Delete, LuUpload as Upload, LuUser as User,
        LuWrench as Maintenance, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClipboard as Paste, BsCloudFill as Brand, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsHouseFill as Home, BsPerson as User, BsScissors as Cut, BsSearch as Search,
        BsTools as Maintenance, BsTrash as Delete, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BRAND, Brand);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(CUT, Cut);
themed_icon!(DELETE, Delete);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(HOME, Home);
themed_icon!(LOGOUT, Logout);
themed_icon!(MAINTENANCE, Maintenance);
themed_icon!(PASTE, Paste);
themed_icon!(SEARCH, Search);
themed_icon!(UPLOAD, Upload);
themed_icon!(USER, User);
