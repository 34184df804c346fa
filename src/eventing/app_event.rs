//! AppEvent - Worker to UI Messages

use std::path::PathBuf;

use crate::state::log_state::{LogEntry, LogLevel};

/// Everything the worker thread can report back to the window
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Activity feed entry
    Log(LogEntry),

    /// A simulation export finished writing
    ExportCompleted { path: PathBuf },

    /// A simulation export failed
    ExportFailed { message: String },
}

impl AppEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self::Log(LogEntry::now(LogLevel::Info, message))
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::Log(LogEntry::now(LogLevel::Warn, message))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Log(LogEntry::now(LogLevel::Error, message))
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::Log(LogEntry::now(LogLevel::Debug, message))
    }
}
