//! Progress and warning reporting.
//!
//! The generator emits progress and warning lines through an injected
//! sink rather than printing directly, so tests can capture output
//! without touching process-wide streams.

use colored::Colorize;

/// Line-oriented notification sink. Fire-and-forget, no backpressure.
pub trait Reporter {
    /// Report a progress line for one generated model.
    fn progress(&mut self, message: &str);

    /// Report a non-fatal warning.
    fn warn(&mut self, message: &str);
}

/// Reporter printing to stdout with the CLI color scheme.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self, message: &str) {
        println!("  {message}");
    }

    fn warn(&mut self, message: &str) {
        println!("{} {}", "Warning:".yellow(), message);
    }
}

/// Reporter buffering messages in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    /// Captured progress lines, in emission order.
    pub progress: Vec<String>,

    /// Captured warnings, in emission order.
    pub warnings: Vec<String>,
}

impl Reporter for MemoryReporter {
    fn progress(&mut self, message: &str) {
        self.progress.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_captures_in_order() {
        let mut reporter = MemoryReporter::default();

        reporter.progress("first");
        reporter.warn("oops");
        reporter.progress("second");

        assert_eq!(reporter.progress, vec!["first", "second"]);
        assert_eq!(reporter.warnings, vec!["oops"]);
    }
}
