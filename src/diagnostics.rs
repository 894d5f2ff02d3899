//! Warning collection and reporting.
//!
//! Fatal conditions travel as `GedError` values through ordinary `Result`
//! returns; everything locally recoverable lands here. Warnings never
//! halt the pipeline - they accumulate on the parse session and the CLI
//! flushes them to stderr before any fatal error is printed.

use std::fmt;

use crate::error::GedError;

/// A single recoverable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Machine-readable code (e.g. "ged::parse::obsolete-tag").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl Warning {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Append-only log of warnings gathered during a parse.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    warnings: Vec<Warning>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn warn(&mut self, code: &'static str, message: impl Into<String>) {
        self.warnings.push(Warning::new(code, message));
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Merge another log into this one.
    pub fn merge(&mut self, other: WarningLog) {
        self.warnings.extend(other.warnings);
    }
}

/// Print accumulated warnings to stderr, one `[WARNING]` line per entry.
pub fn report_warnings(log: &WarningLog) {
    for warning in log.iter() {
        eprintln!("[WARNING] {}", warning);
    }
}

/// Print a fatal error to stderr as a `[ERROR]` line.
pub fn report_error(error: &GedError) {
    eprintln!("[ERROR] {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = WarningLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_warn_appends() {
        let mut log = WarningLog::new();
        log.warn("ged::test", "first");
        log.warn("ged::test", "second");

        assert_eq!(log.len(), 2);
        let messages: Vec<_> = log.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_merge() {
        let mut a = WarningLog::new();
        a.warn("ged::a", "from a");

        let mut b = WarningLog::new();
        b.warn("ged::b", "from b");

        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::new("ged::parse::obsolete-tag", "Record ignored");
        assert_eq!(w.to_string(), "Record ignored");
    }
}
