//! Logging abstraction for testable output.
//!
//! Trait-based so command orchestration can be asserted against a
//! capturing mock instead of global logging state.

use std::io::Write;
use std::sync::{Arc, RwLock};

/// Verbosity level for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Normal output (always shown)
    Normal,
    /// Verbose output (-v flag)
    Verbose,
    /// Debug output (-vv flag)
    Debug,
}

impl Verbosity {
    /// Create verbosity from CLI flag count.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Trait for logging output.
pub trait Logger: Send + Sync {
    /// Log a message at the given verbosity level.
    fn log(&self, level: Verbosity, message: &str);

    /// Log at normal level (always visible).
    fn info(&self, message: &str) {
        self.log(Verbosity::Normal, message);
    }

    /// Log at verbose level (requires -v).
    fn verbose(&self, message: &str) {
        self.log(Verbosity::Verbose, message);
    }

    /// Log at debug level (requires -vv).
    fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message);
    }
}

/// Logger that writes to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: Verbosity,
}

impl StderrLogger {
    pub fn new(level: Verbosity) -> Self {
        Self { level }
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: Verbosity, message: &str) {
        if level <= self.level {
            let _ = writeln!(std::io::stderr(), "{}", message);
        }
    }
}

/// Mock logger for testing that captures all messages.
#[derive(Debug, Clone, Default)]
pub struct MockLogger {
    messages: Arc<RwLock<Vec<(Verbosity, String)>>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .read()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Messages captured at one level.
    pub fn messages_at_level(&self, level: Verbosity) -> Vec<String> {
        self.messages
            .read()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// True if any captured message contains the substring.
    pub fn contains(&self, substring: &str) -> bool {
        self.messages().iter().any(|m| m.contains(substring))
    }
}

impl Logger for MockLogger {
    fn log(&self, level: Verbosity, message: &str) {
        // Capture regardless of level so tests can assert on everything
        // that would have been logged.
        self.messages
            .write()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_count() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_count(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(7), Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Debug);
    }

    #[test]
    fn test_mock_captures_in_order() {
        let logger = MockLogger::new();
        logger.info("first");
        logger.verbose("second");
        logger.debug("third");

        assert_eq!(logger.messages(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_mock_messages_at_level() {
        let logger = MockLogger::new();
        logger.info("normal");
        logger.verbose("verbose");

        assert_eq!(
            logger.messages_at_level(Verbosity::Verbose),
            vec!["verbose"]
        );
    }

    #[test]
    fn test_mock_contains() {
        let logger = MockLogger::new();
        logger.info("state file missing, starting empty");

        assert!(logger.contains("starting empty"));
        assert!(!logger.contains("corrupt"));
    }

    #[test]
    fn test_mock_clone_shares_messages() {
        let logger = MockLogger::new();
        let other = logger.clone();
        logger.info("shared");

        assert!(other.contains("shared"));
    }

    #[test]
    fn test_logger_trait_object() {
        let logger: Box<dyn Logger> = Box::new(MockLogger::new());
        logger.info("via trait object");
    }
}
