//! crates/cconsole/src/console/mod.rs
//! The leveled console facade.

use std::fmt;

use crate::config::ConsoleConfig;
use crate::levels::LogLevel;

mod channels;
mod drop_in;
mod passthrough;

/// Threshold used when no valid level is supplied.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Debug;

/// Leveled, colorized facade over a [`ConsoleSink`](console_sink::ConsoleSink).
///
/// The facade owns a single piece of state besides the sink: the current
/// threshold. `log`, `debug`, `info`, `warn`, `error` and `assert` are gated on
/// it and decorated with a level tag and color hint. Every other console
/// operation is forwarded to the sink unchanged.
///
/// The sink is supplied by the caller. Pass `&mut sink` to keep ownership
/// outside the facade.
///
/// # Examples
///
/// ```
/// use cconsole::LeveledConsole;
/// use console_sink::{ColorChoice, StdConsole};
///
/// let sink = StdConsole::with_writers(Vec::new(), Vec::new(), ColorChoice::Never);
/// let mut console = LeveledConsole::new(sink, "INFO");
///
/// console.debug(&[&"suppressed"]);
/// console.info(&[&"ready after", &3, &"retries"]);
/// console.set_log_level("DEBUG");
/// console.debug(&[&"now visible"]);
///
/// let (out, _) = console.into_inner().into_writers();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "[INFO] ready after 3 retries\n[DEBUG] now visible\n"
/// );
/// ```
pub struct LeveledConsole<S> {
    sink: S,
    threshold: LogLevel,
}

impl<S: console_sink::ConsoleSink> LeveledConsole<S> {
    /// Creates a facade whose threshold is the level named `level`.
    ///
    /// Names are matched exactly against `DEBUG`, `INFO`, `WARN` and `ERROR`.
    /// Any other name selects `DEBUG` and reports the substitution through
    /// this console's own debug channel, which the new threshold always lets
    /// through.
    pub fn new(sink: S, level: &str) -> Self {
        match LogLevel::from_name(level) {
            Some(threshold) => Self::with_level(sink, threshold),
            None => {
                let mut console = Self::with_level(sink, DEFAULT_LEVEL);
                let notice = format!(
                    "console instantiated with invalid log level \"{level}\", defaulting to \"{DEFAULT_LEVEL}\""
                );
                console.debug(&[&notice]);
                console
            }
        }
    }

    /// Creates a facade from a [`ConsoleConfig`].
    ///
    /// A configured level name goes through [`new`](Self::new), so invalid
    /// names are reported the same way. Without a configured level the
    /// threshold is [`DEFAULT_LEVEL`] and nothing is emitted.
    pub fn from_config(sink: S, config: &ConsoleConfig) -> Self {
        match config.level() {
            Some(name) => Self::new(sink, name),
            None => Self::with_level(sink, DEFAULT_LEVEL),
        }
    }

    /// Replaces the threshold with the level named `level`.
    ///
    /// Unknown names leave the threshold untouched and emit one error-level
    /// message through this console.
    pub fn set_log_level(&mut self, level: &str) {
        match LogLevel::from_name(level) {
            Some(threshold) => self.threshold = threshold,
            None => {
                let message = format!("Invalid log level \"{level}\" provided to set_log_level");
                self.error(&[&message]);
            }
        }
    }
}

impl<S> LeveledConsole<S> {
    /// Creates a facade with an already validated threshold. Emits nothing.
    #[must_use]
    pub const fn with_level(sink: S, threshold: LogLevel) -> Self {
        Self { sink, threshold }
    }

    /// Returns the current threshold.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.threshold
    }

    /// Replaces the threshold.
    pub fn set_level(&mut self, threshold: LogLevel) {
        self.threshold = threshold;
    }

    /// Reports whether a message at `level` would reach the sink right now.
    #[must_use]
    pub const fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.threshold)
    }

    /// Borrows the wrapped sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the wrapped sink.
    #[must_use]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the facade and returns the wrapped sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S> fmt::Debug for LeveledConsole<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledConsole")
            .field("threshold", &self.threshold)
            .field("sink", &self.sink)
            .finish()
    }
}

#[cfg(test)]
mod tests;
