//! Operations forwarded to the sink without gating or decoration.

use std::fmt;

use console_sink::{ConsoleSink, DirOptions};

use super::LeveledConsole;

impl<S: ConsoleSink> LeveledConsole<S> {
    /// Forwards to [`ConsoleSink::clear`].
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    /// Forwards to [`ConsoleSink::count`].
    pub fn count(&mut self, label: Option<&str>) {
        self.sink.count(label);
    }

    /// Forwards to [`ConsoleSink::count_reset`].
    pub fn count_reset(&mut self, label: Option<&str>) {
        self.sink.count_reset(label);
    }

    /// Forwards to [`ConsoleSink::group`].
    pub fn group(&mut self, data: &[&dyn fmt::Display]) {
        self.sink.group(data);
    }

    /// Forwards to [`ConsoleSink::group_collapsed`].
    pub fn group_collapsed(&mut self, data: &[&dyn fmt::Display]) {
        self.sink.group_collapsed(data);
    }

    /// Forwards to [`ConsoleSink::group_end`].
    pub fn group_end(&mut self) {
        self.sink.group_end();
    }

    /// Forwards to [`ConsoleSink::time`].
    pub fn time(&mut self, label: Option<&str>) {
        self.sink.time(label);
    }

    /// Forwards to [`ConsoleSink::time_log`].
    pub fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]) {
        self.sink.time_log(label, data);
    }

    /// Forwards to [`ConsoleSink::time_end`].
    pub fn time_end(&mut self, label: Option<&str>) {
        self.sink.time_end(label);
    }

    /// Forwards to [`ConsoleSink::trace`].
    pub fn trace(&mut self, data: &[&dyn fmt::Display]) {
        self.sink.trace(data);
    }

    /// Forwards to [`ConsoleSink::dirxml`].
    pub fn dirxml(&mut self, data: &[&dyn fmt::Display]) {
        self.sink.dirxml(data);
    }

    /// Forwards to [`ConsoleSink::table`].
    pub fn table(&mut self, data: &dyn fmt::Debug, columns: Option<&[&str]>) {
        self.sink.table(data, columns);
    }

    /// Forwards to [`ConsoleSink::dir`].
    pub fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>) {
        self.sink.dir(object, options);
    }

    // Profiling calls are dropped silently on sinks without a profiler.

    /// Forwards to [`Profiler::time_stamp`](console_sink::Profiler::time_stamp) when available.
    pub fn time_stamp(&mut self, label: Option<&str>) {
        if let Some(profiler) = self.sink.profiler() {
            profiler.time_stamp(label);
        }
    }

    /// Forwards to [`Profiler::profile`](console_sink::Profiler::profile) when available.
    pub fn profile(&mut self, label: Option<&str>) {
        if let Some(profiler) = self.sink.profiler() {
            profiler.profile(label);
        }
    }

    /// Forwards to [`Profiler::profile_end`](console_sink::Profiler::profile_end) when available.
    pub fn profile_end(&mut self, label: Option<&str>) {
        if let Some(profiler) = self.sink.profiler() {
            profiler.profile_end(label);
        }
    }
}
