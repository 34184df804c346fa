//! Layout Components
//!
//! Window chrome: header, nav rail, activity feed.

pub mod header;
pub mod log_panel;
pub mod sidebar;
