//! Utility Modules
//!
//! Paths, number formatting, and preference persistence.

pub mod format;
pub mod fs;
pub mod prefs_store;
