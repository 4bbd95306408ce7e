//! crates/cconsole/src/macros.rs
//! Shorthand for passing heterogeneous values to the facade channels.
//!
//! Each macro takes the console followed by any number of [`Display`](std::fmt::Display)
//! values and builds the argument slice expected by the matching method.

/// Calls [`LeveledConsole::log`](crate::LeveledConsole::log).
///
/// # Example
/// ```
/// use cconsole::{LeveledConsole, console_log};
/// use console_sink::{ColorChoice, StdConsole};
///
/// let sink = StdConsole::with_writers(Vec::new(), Vec::new(), ColorChoice::Never);
/// let mut console = LeveledConsole::new(sink, "INFO");
/// console_log!(console, "copied", 3, "files");
///
/// let (out, _) = console.into_inner().into_writers();
/// assert_eq!(out, b"[LOG] copied 3 files\n");
/// ```
#[macro_export]
macro_rules! console_log {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.log(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Calls [`LeveledConsole::debug`](crate::LeveledConsole::debug).
#[macro_export]
macro_rules! console_debug {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.debug(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Calls [`LeveledConsole::info`](crate::LeveledConsole::info).
#[macro_export]
macro_rules! console_info {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.info(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Calls [`LeveledConsole::warn`](crate::LeveledConsole::warn).
#[macro_export]
macro_rules! console_warn {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.warn(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Calls [`LeveledConsole::error`](crate::LeveledConsole::error).
#[macro_export]
macro_rules! console_error {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.error(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Calls [`LeveledConsole::assert`](crate::LeveledConsole::assert).
///
/// # Example
/// ```
/// use cconsole::{LeveledConsole, console_assert};
/// use console_sink::{ColorChoice, StdConsole};
///
/// let sink = StdConsole::with_writers(Vec::new(), Vec::new(), ColorChoice::Never);
/// let mut console = LeveledConsole::new(sink, "ERROR");
/// let retries = 4;
/// console_assert!(console, retries < 3, "too many retries:", retries);
///
/// let (_, err) = console.into_inner().into_writers();
/// assert_eq!(err, b"[ERROR] Assertion failed too many retries: 4\n");
/// ```
#[macro_export]
macro_rules! console_assert {
    ($console:expr, $condition:expr $(, $arg:expr)* $(,)?) => {
        $console.assert($condition, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}
