//! crates/console-sink/src/std_console.rs
//! Terminal console writing to standard output and standard error.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use crate::dir_options::DirOptions;
use crate::sink::{ConsoleSink, InfoChannel};
use crate::style::{ColorChoice, StyledArgs};

const DEFAULT_LABEL: &str = "default";
const INDENT: &str = "  ";
const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[0J";

/// Console sink backed by two [`io::Write`] targets.
///
/// `log`, `info`, `debug` and the bookkeeping operations write to the output
/// stream; `warn`, `error` and `trace` write to the error stream. Every line is
/// indented by two spaces per open group. Write failures are ignored.
///
/// The sink exposes a dedicated [`InfoChannel`] but no profiler.
///
/// # Examples
///
/// ```
/// use console_sink::{ColorChoice, ConsoleSink, StdConsole};
///
/// let mut console = StdConsole::with_writers(Vec::new(), Vec::new(), ColorChoice::Never);
/// console.group(&[&"phase one"]);
/// console.log(&[&"[LOG]", &"copied", &3, &"files"]);
/// console.group_end();
/// console.count(None);
///
/// let (out, _) = console.into_writers();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "phase one\n  [LOG] copied 3 files\ndefault: 1\n"
/// );
/// ```
#[derive(Debug)]
pub struct StdConsole<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
    styled: bool,
    group_depth: usize,
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
}

impl StdConsole {
    /// Creates a console over the process's standard streams.
    ///
    /// [`ColorChoice::Auto`] styles output when standard output is a terminal
    /// and `NO_COLOR` is unset.
    #[must_use]
    pub fn new(choice: ColorChoice) -> Self {
        Self::with_styling(io::stdout(), io::stderr(), choice.should_style())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl<O, E> StdConsole<O, E> {
    /// Creates a console over arbitrary writers.
    ///
    /// The writers are not assumed to be terminals, so [`ColorChoice::Auto`]
    /// leaves output unstyled here.
    #[must_use]
    pub fn with_writers(out: O, err: E, choice: ColorChoice) -> Self {
        Self::with_styling(out, err, choice.resolve(false, false))
    }

    fn with_styling(out: O, err: E, styled: bool) -> Self {
        Self {
            out,
            err,
            styled,
            group_depth: 0,
            counters: HashMap::new(),
            timers: HashMap::new(),
        }
    }

    /// Reports whether style directives are rendered as ANSI escapes.
    #[must_use]
    pub const fn is_styled(&self) -> bool {
        self.styled
    }

    /// Returns the number of currently open groups.
    #[must_use]
    pub const fn group_depth(&self) -> usize {
        self.group_depth
    }

    /// Consumes the console and returns the output and error writers.
    #[must_use]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> StdConsole<O, E> {
    fn print_out(&mut self, args: &[&dyn fmt::Display]) {
        let line = StyledArgs::new(args, self.styled).to_string();
        write_indented(&mut self.out, self.group_depth, &line);
    }

    fn print_err(&mut self, args: &[&dyn fmt::Display]) {
        let line = StyledArgs::new(args, self.styled).to_string();
        write_indented(&mut self.err, self.group_depth, &line);
    }

    fn open_group(&mut self, data: &[&dyn fmt::Display]) {
        if !data.is_empty() {
            self.print_out(data);
        }
        self.group_depth += 1;
    }

    fn report_elapsed(&mut self, label: &str, started: Instant, data: &[&dyn fmt::Display]) {
        let millis = started.elapsed().as_secs_f64() * 1000.0;
        let head = format!("{label}: {millis:.3}ms");
        let mut line: Vec<&dyn fmt::Display> = Vec::with_capacity(data.len() + 1);
        line.push(&head);
        line.extend_from_slice(data);
        self.print_out(&line);
    }
}

fn write_indented<W: Write>(writer: &mut W, depth: usize, text: &str) {
    let indent = INDENT.repeat(depth);
    let mut buffer = String::with_capacity(text.len() + indent.len() + 1);
    for line in text.split('\n') {
        buffer.push_str(&indent);
        buffer.push_str(line);
        buffer.push('\n');
    }
    let _ = writer.write_all(buffer.as_bytes());
}

impl<O: Write, E: Write> ConsoleSink for StdConsole<O, E> {
    fn log(&mut self, args: &[&dyn fmt::Display]) {
        self.print_out(args);
    }

    fn debug(&mut self, args: &[&dyn fmt::Display]) {
        self.print_out(args);
    }

    fn warn(&mut self, args: &[&dyn fmt::Display]) {
        self.print_err(args);
    }

    fn error(&mut self, args: &[&dyn fmt::Display]) {
        self.print_err(args);
    }

    fn clear(&mut self) {
        if self.styled {
            let _ = self.out.write_all(CLEAR_SCREEN.as_bytes());
            let _ = self.out.flush();
        }
    }

    fn count(&mut self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let counter = self.counters.entry(label.to_owned()).or_insert(0);
        *counter += 1;
        let line = format!("{label}: {counter}");
        self.print_out(&[&line]);
    }

    fn count_reset(&mut self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_LABEL);
        if let Some(counter) = self.counters.get_mut(label) {
            *counter = 0;
        } else {
            let line = format!("Count for '{label}' does not exist");
            self.print_err(&[&line]);
        }
    }

    fn group(&mut self, data: &[&dyn fmt::Display]) {
        self.open_group(data);
    }

    fn group_collapsed(&mut self, data: &[&dyn fmt::Display]) {
        self.open_group(data);
    }

    fn group_end(&mut self) {
        self.group_depth = self.group_depth.saturating_sub(1);
    }

    fn time(&mut self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_LABEL);
        if self.timers.contains_key(label) {
            let line = format!("Timer '{label}' already exists");
            self.print_err(&[&line]);
            return;
        }
        self.timers.insert(label.to_owned(), Instant::now());
    }

    fn time_log(&mut self, label: Option<&str>, data: &[&dyn fmt::Display]) {
        let label = label.unwrap_or(DEFAULT_LABEL);
        match self.timers.get(label).copied() {
            Some(started) => self.report_elapsed(label, started, data),
            None => {
                let line = format!("Timer '{label}' does not exist");
                self.print_err(&[&line]);
            }
        }
    }

    fn time_end(&mut self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_LABEL);
        match self.timers.remove(label) {
            Some(started) => self.report_elapsed(label, started, &[]),
            None => {
                let line = format!("Timer '{label}' does not exist");
                self.print_err(&[&line]);
            }
        }
    }

    fn trace(&mut self, data: &[&dyn fmt::Display]) {
        let mut line: Vec<&dyn fmt::Display> = Vec::with_capacity(data.len() + 1);
        line.push(&"Trace:");
        line.extend_from_slice(data);
        self.print_err(&line);

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let rendered = backtrace.to_string();
            write_indented(&mut self.err, self.group_depth, rendered.trim_end());
        }
    }

    fn dirxml(&mut self, data: &[&dyn fmt::Display]) {
        self.print_out(data);
    }

    fn table(&mut self, data: &dyn fmt::Debug, _columns: Option<&[&str]>) {
        let rendered = format!("{data:#?}");
        write_indented(&mut self.out, self.group_depth, &rendered);
    }

    fn dir(&mut self, object: &dyn fmt::Debug, options: Option<DirOptions>) {
        let rendered = if options.unwrap_or_default().expanded() {
            format!("{object:#?}")
        } else {
            format!("{object:?}")
        };
        write_indented(&mut self.out, self.group_depth, &rendered);
    }

    fn info_channel(&mut self) -> Option<&mut dyn InfoChannel> {
        Some(self)
    }
}

impl<O: Write, E: Write> InfoChannel for StdConsole<O, E> {
    fn info(&mut self, args: &[&dyn fmt::Display]) {
        self.print_out(args);
    }
}
