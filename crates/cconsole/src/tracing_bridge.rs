//! crates/cconsole/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`LeveledConsole`].
//!
//! [`ConsoleLayer`] is a tracing-subscriber layer that forwards every event to a
//! shared console at the matching severity. The console's threshold decides
//! what is printed, so `set_log_level` on the shared handle also governs
//! tracing output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cconsole::{LeveledConsole, init_tracing};
//! use console_sink::StdConsole;
//!
//! let console = init_tracing(LeveledConsole::new(StdConsole::default(), "INFO"));
//! tracing::info!(target: "app::sync", "synchronised");
//! console.lock().unwrap().set_log_level("DEBUG");
//! tracing::debug!("now visible");
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use console_sink::ConsoleSink;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::console::LeveledConsole;
use crate::levels::LogLevel;

/// Console shared between the tracing layer and application code.
pub type SharedConsole<S> = Arc<Mutex<LeveledConsole<S>>>;

/// A tracing layer that writes events through a [`LeveledConsole`].
///
/// Each event is emitted as `"<target>:", <message>, <field>=<value>...` at
/// the level given by [`level_for`](Self::level_for).
///
/// Event fields are rendered before the console lock is taken; the lock is
/// held only while the line is written to the sink. The mutex is not
/// reentrant, so the sink must not emit tracing events itself, and callers
/// must release their guard before invoking `tracing` macros. Either would
/// deadlock.
pub struct ConsoleLayer<S> {
    console: SharedConsole<S>,
}

impl<S> ConsoleLayer<S> {
    /// Creates a layer writing to `console`.
    #[must_use]
    pub const fn new(console: SharedConsole<S>) -> Self {
        Self { console }
    }

    /// Returns the shared console handle.
    #[must_use]
    pub fn console(&self) -> SharedConsole<S> {
        Arc::clone(&self.console)
    }

    /// Maps a tracing level to a console level.
    #[must_use]
    pub const fn level_for(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG | Level::TRACE => LogLevel::Debug,
        }
    }
}

impl<S, R> Layer<R> for ConsoleLayer<S>
where
    S: ConsoleSink + Send + 'static,
    R: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, R>) {
        let metadata = event.metadata();
        let level = Self::level_for(metadata.level());

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let target = format!("{}:", metadata.target());
        let mut line: Vec<&dyn fmt::Display> = Vec::with_capacity(visitor.fields.len() + 2);
        line.push(&target);
        if let Some(message) = &visitor.message {
            line.push(message);
        }
        line.extend(visitor.fields.iter().map(|field| field as &dyn fmt::Display));

        let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        console.emit(level, &line);
    }
}

/// Visitor collecting the message and remaining fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that routes tracing events through `console`.
///
/// Returns the shared handle so the caller can keep adjusting the threshold.
pub fn init_tracing<S>(console: LeveledConsole<S>) -> SharedConsole<S>
where
    S: ConsoleSink + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let shared = Arc::new(Mutex::new(console));
    let layer = ConsoleLayer::new(Arc::clone(&shared));

    tracing_subscriber::registry().with(layer).init();
    shared
}
