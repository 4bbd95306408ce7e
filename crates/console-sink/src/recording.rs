//! crates/console-sink/src/recording.rs
//! In-memory sink that records every call for assertions in tests.

use std::fmt;

use crate::dir_options::DirOptions;
use crate::sink::{ConsoleSink, InfoChannel, Profiler};

/// A non-channel call observed by [`RecordingConsole`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordedCall {
    /// `clear()`
    Clear,
    /// `count(label)`
    Count(Option<String>),
    /// `count_reset(label)`
    CountReset(Option<String>),
    /// `group(data)`
    Group(Vec<String>),
    /// `group_collapsed(data)`
    GroupCollapsed(Vec<String>),
    /// `group_end()`
    GroupEnd,
    /// `time(label)`
    Time(Option<String>),
    /// `time_log(label, data)`
    TimeLog(Option<String>, Vec<String>),
    /// `time_end(label)`
    TimeEnd(Option<String>),
    /// `trace(data)`
    Trace(Vec<String>),
    /// `dirxml(data)`
    Dirxml(Vec<String>),
    /// `table(data, columns)` with `data` rendered through `Debug`.
    Table(String, Option<Vec<String>>),
    /// `dir(object, options)` with `object` rendered through `Debug`.
    Dir(String, Option<DirOptions>),
    /// `time_stamp(label)`
    TimeStamp(Option<String>),
    /// `profile(label)`
    Profile(Option<String>),
    /// `profile_end(label)`
    ProfileEnd(Option<String>),
}

/// Sink that stores every call instead of printing it.
///
/// Channel calls are kept per channel as the `Display` rendering of each
/// argument; every other call is appended to [`calls`](Self::calls) in order.
///
/// [`RecordingConsole::new`] advertises the info channel and the profiler;
/// [`RecordingConsole::minimal`] advertises neither, standing in for a console
/// that lacks the optional operations.
#[derive(Clone, Debug, Default)]
pub struct RecordingConsole {
    /// Arguments of each `log` call.
    pub logs: Vec<Vec<String>>,
    /// Arguments of each `debug` call.
    pub debugs: Vec<Vec<String>>,
    /// Arguments of each `info` call.
    pub infos: Vec<Vec<String>>,
    /// Arguments of each `warn` call.
    pub warns: Vec<Vec<String>>,
    /// Arguments of each `error` call.
    pub errors: Vec<Vec<String>>,
    /// Every other call, in order.
    pub calls: Vec<RecordedCall>,
    minimal: bool,
}

impl RecordingConsole {
    /// Creates a recorder exposing every optional capability.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder without an info channel or profiler.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            minimal: true,
            ..Self::default()
        }
    }

    /// Total number of channel calls across `log`, `debug`, `info`, `warn` and `error`.
    #[must_use]
    pub fn channel_calls(&self) -> usize {
        self.logs.len()
            + self.debugs.len()
            + self.infos.len()
            + self.warns.len()
            + self.errors.len()
    }
}

fn render(args: &[&dyn fmt::Display]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

fn owned(label: Option<&str>) -> Option<String> {
    label.map(str::to_owned)
}

impl ConsoleSink for RecordingConsole {
    fn log(&mut self, args: &[&dyn fmt::Display]) {
        self.logs.push(render(args));
    }

    fn debug(&mut self, args: &[&dyn fmt::Display]) {
        self.debugs.push(render(args));
    }

    fn warn(&mut self, args: &[&dyn fmt::Display]) {
        self.warns.push(render(args));
    }

    fn error(&mut self, args: &[&dyn fmt::Display]) {
        self.errors.push(render(args));
    }

    fn clear(&mut self) {
        self.calls.push(RecordedCall::Clear);
    }

    fn count(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::Count(owned(label)));
    }

    fn count_reset(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::CountReset(owned(label)));
    }

    fn group(&mut self, data: &[&dyn fmt::Display]) {
        self.calls.push(RecordedCall::Group(render(data)));
    }

    fn group_collapsed(&mut self, data: &[&dyn fmt::Display]) {
        self.calls.push(RecordedCall::GroupCollapsed(render(data)));
    }

    fn group_end(&mut self) {
        self.calls.push(RecordedCall::GroupEnd);
    }

    fn time(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::Time(owned(label)));
    }

    fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]) {
        self.calls.push(RecordedCall::TimeLog(owned(label), render(data)));
    }

    fn time_end(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::TimeEnd(owned(label)));
    }

    fn trace(&mut self, data: &[&dyn fmt::Display]) {
        self.calls.push(RecordedCall::Trace(render(data)));
    }

    fn dirxml(&mut self, data: &[&dyn fmt::Display]) {
        self.calls.push(RecordedCall::Dirxml(render(data)));
    }

    fn table(&mut self, data: &dyn fmt::Debug, columns: Option<&[&str]>) {
        let columns = columns.map(|columns| columns.iter().map(|&c| c.to_owned()).collect());
        self.calls.push(RecordedCall::Table(format!("{data:?}"), columns));
    }

    fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>) {
        self.calls.push(RecordedCall::Dir(format!("{object:?}"), options));
    }

    fn info_channel(&mut self) -> Option<&mut dyn InfoChannel> {
        if self.minimal { None } else { Some(self) }
    }

    fn profiler(&mut self) -> Option<&mut dyn Profiler> {
        if self.minimal { None } else { Some(self) }
    }
}

impl InfoChannel for RecordingConsole {
    fn info(&mut self, args: &[&dyn fmt::Display]) {
        self.infos.push(render(args));
    }
}

impl Profiler for RecordingConsole {
    fn time_stamp(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::TimeStamp(owned(label)));
    }

    fn profile(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::Profile(owned(label)));
    }

    fn profile_end(&mut self, label: Option<&str>) {
        self.calls.push(RecordedCall::ProfileEnd(owned(label)));
    }
}
