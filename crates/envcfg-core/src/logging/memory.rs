//! Capturing logger

use std::sync::RwLock;

use super::level::LogLevel;
use super::traits::Logger;

/// A logger that records every line in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: RwLock<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.read().map(|l| l.clone()).unwrap_or_default()
    }

    /// Whether any line at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.write() {
            lines.clear();
        }
    }

    fn push(&self, level: LogLevel, message: &str) {
        if let Ok(mut lines) = self.lines.write() {
            lines.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::logging::SharedLogger;

    #[test]
    fn test_memory_logger_records() {
        let logger = MemoryLogger::new();
        logger.info("loaded");
        logger.log(LogLevel::Error, "failed");

        assert_eq!(logger.lines().len(), 2);
        assert!(logger.contains(LogLevel::Info, "loaded"));
        assert!(logger.contains(LogLevel::Error, "fail"));
        assert!(!logger.contains(LogLevel::Warn, "loaded"));

        logger.clear();
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_log_macros_format() {
        let memory = Arc::new(MemoryLogger::new());
        let shared: SharedLogger = memory.clone();

        crate::log_debug!(shared, "source {} ready", "env");
        crate::log_warn!(shared, "{} missing", 2);

        assert!(memory.contains(LogLevel::Debug, "source env ready"));
        assert!(memory.contains(LogLevel::Warn, "2 missing"));
    }
}
