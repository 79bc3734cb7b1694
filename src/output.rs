//! Log sinks for harness output.
//!
//! The harness reports through the [`Logger`] collaborator: one synchronous
//! operation, no failure propagation into the core. [`ConsoleLogger`] is the
//! default sink for binaries; [`BufferLogger`] captures lines for
//! inspection in tests.

use std::io::IsTerminal;

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// External sink for structured text lines.
///
/// Called synchronously by the harness; implementations must not panic or
/// otherwise propagate failures into the run.
pub trait Logger {
    /// Emit one line.
    fn log(&mut self, line: &str);
}

/// Logger that prints to stdout, coloring verdict lines when attached to a
/// terminal.
#[derive(Debug)]
pub struct ConsoleLogger {
    colors_enabled: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl ConsoleLogger {
    /// Create a console logger with colors auto-detected from the TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }
}

impl Logger for ConsoleLogger {
    fn log(&mut self, line: &str) {
        if !self.colors_enabled {
            println!("{}", line);
            return;
        }
        if line.starts_with("...Failed") || line.starts_with("no matching suite") {
            println!("{}{}{}", RED, line, RESET);
        } else if line.starts_with("...OK") {
            println!("{}{}{}", GREEN, line, RESET);
        } else if line.starts_with('#') {
            // assertion failure detail lines
            println!("{}{}{}", YELLOW, line, RESET);
        } else {
            println!("{}", line);
        }
    }
}

/// Logger that collects lines in memory.
///
/// # Example
///
/// ```rust,ignore
/// let mut logger = BufferLogger::new();
/// let failures = registry.run(None, &mut logger);
/// assert!(logger.contains("...OK"));
/// ```
#[derive(Debug, Default)]
pub struct BufferLogger {
    lines: Vec<String>,
}

impl BufferLogger {
    /// Create an empty buffer logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines logged so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any logged line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Number of logged lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Logger for BufferLogger {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
