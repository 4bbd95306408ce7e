//! Gated, decorated severity channels.

use std::fmt;

use console_sink::ConsoleSink;

use super::LeveledConsole;
use crate::decorate::{ASSERTION_FAILED, LOG_TAG, color_value, prepend, style_directive};
use crate::levels::LogLevel;

impl<S: ConsoleSink> LeveledConsole<S> {
    /// Writes `args` to the sink's `log` channel behind a plain `[LOG]` tag.
    ///
    /// Gated at [`LogLevel::Info`].
    pub fn log(&mut self, args: &[&dyn fmt::Display]) {
        if !self.is_enabled(LogLevel::Info) {
            return;
        }
        let line = prepend(&[&LOG_TAG], args);
        self.sink.log(&line);
    }

    /// Writes `args` to the sink's `debug` channel.
    pub fn debug(&mut self, args: &[&dyn fmt::Display]) {
        self.emit(LogLevel::Debug, args);
    }

    /// Writes `args` to the sink's info channel, or to `log` when the sink has
    /// no dedicated info channel.
    pub fn info(&mut self, args: &[&dyn fmt::Display]) {
        self.emit(LogLevel::Info, args);
    }

    /// Writes `args` to the sink's `warn` channel.
    pub fn warn(&mut self, args: &[&dyn fmt::Display]) {
        self.emit(LogLevel::Warn, args);
    }

    /// Writes `args` to the sink's `error` channel.
    pub fn error(&mut self, args: &[&dyn fmt::Display]) {
        self.emit(LogLevel::Error, args);
    }

    /// Emits an error-level `Assertion failed` message followed by `data`
    /// when `condition` is false.
    pub fn assert(&mut self, condition: bool, data: &[&dyn fmt::Display]) {
        if condition {
            return;
        }
        let line = prepend(&[&ASSERTION_FAILED], data);
        self.error(&line);
    }

    /// Forwards `args` at `level` when the threshold allows it.
    ///
    /// The forwarded arguments are the level's style directive, its color
    /// value, then `args` in order.
    pub fn emit(&mut self, level: LogLevel, args: &[&dyn fmt::Display]) {
        if !self.is_enabled(level) {
            return;
        }

        let directive = style_directive(level);
        let color = color_value(level);
        let line = prepend(&[&directive, &color], args);

        match level {
            LogLevel::Debug => self.sink.debug(&line),
            LogLevel::Info => match self.sink.info_channel() {
                Some(channel) => channel.info(&line),
                None => self.sink.log(&line),
            },
            LogLevel::Warn => self.sink.warn(&line),
            LogLevel::Error => self.sink.error(&line),
        }
    }
}
