#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/cconsole/src/lib.rs
//!
//! # Overview
//!
//! `cconsole` is a leveled, colorized facade over a console-like sink. It holds
//! a severity threshold and forwards `log`, `debug`, `info`, `warn` and `error`
//! calls only when their level reaches it, prefixing each forwarded line with a
//! level tag and a color hint. Grouping, timers, counters, tables and object
//! dumps pass straight through to the sink.
//!
//! # Design
//!
//! [`LeveledConsole`] wraps any [`ConsoleSink`](console_sink::ConsoleSink)
//! handed to it at construction. Levels are [`LogLevel`] values ranked
//! `DEBUG` < `INFO` < `WARN` < `ERROR`; `log` is gated as `INFO`.
//!
//! Decorated calls forward `"%c[LEVEL]"`, then `"color:<name>"`, then the
//! caller's arguments. `log` forwards a plain `"[LOG]"` tag instead. Sinks that
//! understand `%c` style the tag; others print the directive as an inert
//! argument.
//!
//! # Invariants
//!
//! - The threshold is always one of the four levels.
//! - Invalid level names never fail a call. At construction they select
//!   `DEBUG` and emit one debug-level notice; on update they leave the
//!   threshold unchanged and emit one error-level message.
//! - Pass-through operations reach the sink exactly once per call regardless
//!   of the threshold. Profiling calls are dropped when the sink has no
//!   profiler.
//!
//! # Examples
//!
//! ```
//! use cconsole::LeveledConsole;
//! use console_sink::RecordingConsole;
//!
//! let mut console = LeveledConsole::new(RecordingConsole::new(), "INFO");
//! console.debug(&[&"x"]);
//! console.info(&[&"y"]);
//! console.count(Some("ticks"));
//!
//! let sink = console.into_inner();
//! assert!(sink.debugs.is_empty());
//! assert_eq!(sink.infos, vec![vec!["%c[INFO]", "color:blue", "y"]]);
//! assert_eq!(sink.calls.len(), 1);
//! ```
//!
//! # See also
//!
//! - `console-sink` for the sink traits and the terminal implementation.

mod config;
mod console;
mod decorate;
mod levels;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConsoleConfig, LOG_LEVEL_ENV, NO_COLOR_ENV};
pub use console::{DEFAULT_LEVEL, LeveledConsole};
pub use decorate::{ASSERTION_FAILED, LOG_TAG, color_value, style_directive};
pub use levels::{LevelParseError, LogLevel};

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::{ConsoleLayer, SharedConsole, init_tracing};
