//! crates/console-sink/src/sink.rs
//! Capability traits describing a console-like output collaborator.

use std::fmt;

use crate::dir_options::DirOptions;

/// Required method surface of a console-like sink.
///
/// Every method takes `&mut self` and returns nothing: sinks absorb their own
/// output failures. Message arguments arrive as a slice of [`fmt::Display`]
/// values in caller order.
///
/// Optional operations are exposed through [`info_channel`](Self::info_channel)
/// and [`profiler`](Self::profiler). A sink that supports them returns
/// `Some(self)`; the defaults report the capability as absent.
///
/// # Examples
///
/// A sink that only counts how often `log` was called:
///
/// ```
/// use std::fmt;
/// use console_sink::{ConsoleSink, DirOptions};
///
/// #[derive(Default)]
/// struct Tally(usize);
///
/// impl ConsoleSink for Tally {
///     fn log(&mut self, _args: &[&dyn fmt::Display]) { self.0 += 1; }
///     fn debug(&mut self, _args: &[&dyn fmt::Display]) {}
///     fn warn(&mut self, _args: &[&dyn fmt::Display]) {}
///     fn error(&mut self, _args: &[&dyn fmt::Display]) {}
///     fn clear(&mut self) {}
///     fn count(&mut self, _label: Option<&str>) {}
///     fn count_reset(&mut self, _label: Option<&str>) {}
///     fn group(&mut self, _data: &[&dyn fmt::Display]) {}
///     fn group_collapsed(&mut self, _data: &[&dyn fmt::Display]) {}
///     fn group_end(&mut self) {}
///     fn time(&mut self, _label: Option<&str>) {}
///     fn time_log(&mut self, _label: Option<&str>, _data: &[&dyn fmt::Display]) {}
///     fn time_end(&mut self, _label: Option<&str>) {}
///     fn trace(&mut self, _data: &[&dyn fmt::Display]) {}
///     fn dirxml(&mut self, _data: &[&dyn fmt::Display]) {}
///     fn table(&mut self, _data: &dyn fmt::Debug, _columns: Option<&[&str]>) {}
///     fn dir(&mut self, _object: &dyn fmt::Debug, _options: Option<DirOptions>) {}
/// }
///
/// let mut tally = Tally::default();
/// tally.log(&[&"hello"]);
/// assert_eq!(tally.0, 1);
/// assert!(tally.info_channel().is_none());
/// assert!(tally.profiler().is_none());
/// ```
pub trait ConsoleSink {
    /// General log channel.
    fn log(&mut self, args: &[&dyn fmt::Display]);

    /// Debug channel.
    fn debug(&mut self, args: &[&dyn fmt::Display]);

    /// Warning channel.
    fn warn(&mut self, args: &[&dyn fmt::Display]);

    /// Error channel.
    fn error(&mut self, args: &[&dyn fmt::Display]);

    /// Clears the output surface, when the sink has one.
    fn clear(&mut self);

    /// Increments and reports the counter for `label`.
    fn count(&mut self, label: Option<&str>);

    /// Resets the counter for `label`.
    fn count_reset(&mut self, label: Option<&str>);

    /// Opens an indented group, printing `data` as its header.
    fn group(&mut self, data: &[&dyn fmt::Display]);

    /// Opens a collapsed group. Sinks without collapsing behave like [`group`](Self::group).
    fn group_collapsed(&mut self, data: &[&dyn fmt::Display]);

    /// Closes the innermost group.
    fn group_end(&mut self);

    /// Starts the timer for `label`.
    fn time(&mut self, label: Option<&str>);

    /// Reports the elapsed time of `label` together with `data`.
    fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]);

    /// Reports and stops the timer for `label`.
    fn time_end(&mut self, label: Option<&str>);

    /// Prints `data` followed by a stack trace.
    fn trace(&mut self, data: &[&dyn fmt::Display]);

    /// Dumps `data` as an element tree. Plain sinks treat this as `log`.
    fn dirxml(&mut self, data: &[&dyn fmt::Display]);

    /// Renders `data` as a table restricted to `columns`.
    fn table(&mut self, data: &dyn fmt::Debug, columns: Option<&[&str]>);

    /// Dumps the structure of `object`.
    fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>);

    /// Returns the dedicated info channel, if the sink has one.
    fn info_channel(&mut self) -> Option<&mut dyn InfoChannel> {
        None
    }

    /// Returns the profiling operations, if the sink has them.
    fn profiler(&mut self) -> Option<&mut dyn Profiler> {
        None
    }
}

/// Dedicated informational channel.
pub trait InfoChannel {
    /// Info channel.
    fn info(&mut self, args: &[&dyn fmt::Display]);
}

/// Profiling operations missing from minimal consoles.
pub trait Profiler {
    /// Adds a marker to the active timeline.
    fn time_stamp(&mut self, label: Option<&str>);

    /// Starts a profile named `label`.
    fn profile(&mut self, label: Option<&str>);

    /// Stops the profile named `label`.
    fn profile_end(&mut self, label: Option<&str>);
}

macro_rules! forward_console_sink {
    ($($wrapper:ty),+ $(,)?) => {$(
        impl<S: ConsoleSink + ?Sized> ConsoleSink for $wrapper {
            fn log(&mut self, args: &[&dyn fmt::Display]) {
                (**self).log(args);
            }

            fn debug(&mut self, args: &[&dyn fmt::Display]) {
                (**self).debug(args);
            }

            fn warn(&mut self, args: &[&dyn fmt::Display]) {
                (**self).warn(args);
            }

            fn error(&mut self, args: &[&dyn fmt::Display]) {
                (**self).error(args);
            }

            fn clear(&mut self) {
                (**self).clear();
            }

            fn count(&mut self, label: Option<&str>) {
                (**self).count(label);
            }

            fn count_reset(&mut self, label: Option<&str>) {
                (**self).count_reset(label);
            }

            fn group(&mut self, data: &[&dyn fmt::Display]) {
                (**self).group(data);
            }

            fn group_collapsed(&mut self, data: &[&dyn fmt::Display]) {
                (**self).group_collapsed(data);
            }

            fn group_end(&mut self) {
                (**self).group_end();
            }

            fn time(&mut self, label: Option<&str>) {
                (**self).time(label);
            }

            fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]) {
                (**self).time_log(label, data);
            }

            fn time_end(&mut self, label: Option<&str>) {
                (**self).time_end(label);
            }

            fn trace(&mut self, data: &[&dyn fmt::Display]) {
                (**self).trace(data);
            }

            fn dirxml(&mut self, data: &[&dyn fmt::Display]) {
                (**self).dirxml(data);
            }

            fn table(&mut self, data: &dyn fmt::Debug, columns: Option<&[&str]>) {
                (**self).table(data, columns);
            }

            fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>) {
                (**self).dir(object, options);
            }

            fn info_channel(&mut self) -> Option<&mut dyn InfoChannel> {
                (**self).info_channel()
            }

            fn profiler(&mut self) -> Option<&mut dyn Profiler> {
                (**self).profiler()
            }
        }
    )+};
}

forward_console_sink!(&mut S, Box<S>);
