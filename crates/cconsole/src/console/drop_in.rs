//! Lets a `LeveledConsole` stand wherever a sink is expected.
//!
//! Each trait method resolves to the inherent method of the same name, so
//! gating and decoration apply exactly as when the facade is called directly.

use std::fmt;

use console_sink::{ConsoleSink, DirOptions, InfoChannel, Profiler};

use super::LeveledConsole;

impl<S: ConsoleSink> ConsoleSink for LeveledConsole<S> {
    fn log(&mut self, args: &[&dyn fmt::Display]) {
        Self::log(self, args);
    }

    fn debug(&mut self, args: &[&dyn fmt::Display]) {
        Self::debug(self, args);
    }

    fn warn(&mut self, args: &[&dyn fmt::Display]) {
        Self::warn(self, args);
    }

    fn error(&mut self, args: &[&dyn fmt::Display]) {
        Self::error(self, args);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn count(&mut self, label: Option<&str>) {
        Self::count(self, label);
    }

    fn count_reset(&mut self, label: Option<&str>) {
        Self::count_reset(self, label);
    }

    fn group(&mut self, data: &[&dyn fmt::Display]) {
        Self::group(self, data);
    }

    fn group_collapsed(&mut self, data: &[&dyn fmt::Display]) {
        Self::group_collapsed(self, data);
    }

    fn group_end(&mut self) {
        Self::group_end(self);
    }

    fn time(&mut self, label: Option<&str>) {
        Self::time(self, label);
    }

    fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]) {
        Self::time_log(self, label, data);
    }

    fn time_end(&mut self, label: Option<&str>) {
        Self::time_end(self, label);
    }

    fn trace(&mut self, data: &[&dyn fmt::Display]) {
        Self::trace(self, data);
    }

    fn dirxml(&mut self, data: &[&dyn fmt::Display]) {
        Self::dirxml(self, data);
    }

    fn table(&mut self, data: &dyn fmt::Debug, columns: Option<&[&str]>) {
        Self::table(self, data, columns);
    }

    fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>) {
        Self::dir(self, object, options);
    }

    fn info_channel(&mut self) -> Option<&mut dyn InfoChannel> {
        Some(self)
    }

    fn profiler(&mut self) -> Option<&mut dyn Profiler> {
        Some(self)
    }
}

impl<S: ConsoleSink> InfoChannel for LeveledConsole<S> {
    fn info(&mut self, args: &[&dyn fmt::Display]) {
        Self::info(self, args);
    }
}

impl<S: ConsoleSink> Profiler for LeveledConsole<S> {
    fn time_stamp(&mut self, label: Option<&str>) {
        Self::time_stamp(self, label);
    }

    fn profile(&mut self, label: Option<&str>) {
        Self::profile(self, label);
    }

    fn profile_end(&mut self, label: Option<&str>) {
        Self::profile_end(self, label);
    }
}
