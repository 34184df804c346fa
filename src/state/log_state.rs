//! LogState - Activity Feed

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Severity of an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x34d399ff),  // Emerald
            LogLevel::Warn => gpui::rgba(0xfbbf24ff),  // Amber
            LogLevel::Error => gpui::rgba(0xf87171ff), // Red
            LogLevel::Debug => gpui::rgba(0x94a3b8ff), // Slate
        }
    }
}

/// One line of the activity feed
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Stamp an entry with the current local time
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// Bounded activity feed; the oldest entries fall off the front.
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an already-built entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Append a freshly stamped entry
    pub fn record(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(LogEntry::now(level, message));
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_drops_oldest_entries_past_capacity() {
        let mut state = LogState::new(3);
        for i in 0..5 {
            state.record(LogLevel::Info, format!("mensaje {i}"));
        }
        assert_eq!(state.len(), 3);
        let front = state.entries().front().expect("front entry");
        assert_eq!(front.message, "mensaje 2");
        let back = state.entries().back().expect("back entry");
        assert_eq!(back.message, "mensaje 4");
    }

    #[test]
    fn entries_keep_arrival_order() {
        let mut state = LogState::default();
        state.record(LogLevel::Info, "a");
        state.record(LogLevel::Warn, "b");
        let levels: Vec<LogLevel> = state.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warn]);
    }

    #[test]
    fn clear_empties_the_feed() {
        let mut state = LogState::default();
        state.record(LogLevel::Debug, "x");
        assert!(!state.is_empty());
        state.clear();
        assert!(state.is_empty());
    }
}
