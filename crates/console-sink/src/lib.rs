#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/console-sink/src/lib.rs
//!
//! # Overview
//!
//! `console-sink` describes the output collaborator wrapped by the
//! `cconsole` facade. A sink is anything that exposes the method surface of a
//! standard console: the `log`/`debug`/`warn`/`error` channels, counters,
//! timers, groups, tables and object dumps. The facade is handed a sink at
//! construction and never reaches for a process-global console itself.
//!
//! # Design
//!
//! [`ConsoleSink`] carries the required operations. Operations a minimal sink
//! may lack are grouped into capability traits, [`InfoChannel`] and
//! [`Profiler`], which callers discover through the probes
//! [`ConsoleSink::info_channel`] and [`ConsoleSink::profiler`]. Both probes
//! default to `None`, so a sink opts in by returning `Some(self)`.
//!
//! [`StdConsole`] is the terminal implementation. It interprets `%c` style
//! directives followed by a `color:<name>` argument, rendering them as ANSI
//! escapes or stripping them depending on its [`ColorChoice`].
//!
//! # Invariants
//!
//! - No sink operation returns an error. Output failures are swallowed so
//!   logging never aborts the caller.
//! - Sinks that do not style must tolerate style directives as inert
//!   arguments.
//!
//! # Examples
//!
//! Render a styled line into in-memory buffers:
//!
//! ```
//! use console_sink::{ColorChoice, ConsoleSink, StdConsole};
//!
//! let mut console = StdConsole::with_writers(Vec::new(), Vec::new(), ColorChoice::Never);
//! console.warn(&[&"%c[WARN]", &"color:yellow", &"disk almost full"]);
//!
//! let (_, err) = console.into_writers();
//! assert_eq!(String::from_utf8(err).unwrap(), "[WARN] disk almost full\n");
//! ```

mod dir_options;
#[cfg(any(test, feature = "test-support"))]
mod recording;
mod sink;
mod std_console;
mod style;

pub use dir_options::DirOptions;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use recording::{RecordedCall, RecordingConsole};
pub use sink::{ConsoleSink, InfoChannel, Profiler};
pub use std_console::StdConsole;
pub use style::{Color, ColorChoice, ColorParseError, StyledArgs};
