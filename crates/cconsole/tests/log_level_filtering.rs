//! Integration tests for log level filtering.
//!
//! These tests verify that the threshold decides which leveled calls reach
//! the sink, and that rejected level names leave the console in a known state.

use cconsole::{LeveledConsole, LogLevel};
use console_sink::RecordingConsole;
use proptest::prelude::*;

fn emit_once(console: &mut LeveledConsole<RecordingConsole>, level: LogLevel) {
    console.emit(level, &[&"message"]);
}

fn recorded_for(sink: &RecordingConsole, level: LogLevel) -> usize {
    match level {
        LogLevel::Debug => sink.debugs.len(),
        LogLevel::Info => sink.infos.len(),
        LogLevel::Warn => sink.warns.len(),
        LogLevel::Error => sink.errors.len(),
    }
}

// ============================================================================
// Threshold Matrix
// ============================================================================

/// Verifies every (threshold, level) pair against the rank ordering.
#[test]
fn forwarding_matrix_follows_rank_order() {
    for threshold in LogLevel::ALL {
        for level in LogLevel::ALL {
            let mut console = LeveledConsole::with_level(RecordingConsole::new(), threshold);
            emit_once(&mut console, level);

            let expected = usize::from(level.rank() >= threshold.rank());
            assert_eq!(
                recorded_for(console.sink(), level),
                expected,
                "threshold {threshold} level {level}"
            );
            assert_eq!(console.sink().channel_calls(), expected);
        }
    }
}

/// Verifies ERROR threshold passes only errors.
#[test]
fn error_threshold_is_the_quietest() {
    let mut console = LeveledConsole::new(RecordingConsole::new(), "ERROR");
    console.log(&[&"l"]);
    console.debug(&[&"d"]);
    console.info(&[&"i"]);
    console.warn(&[&"w"]);
    console.error(&[&"e"]);

    let sink = console.into_inner();
    assert_eq!(sink.channel_calls(), 1);
    assert_eq!(sink.errors.len(), 1);
}

/// Verifies DEBUG threshold passes every channel.
#[test]
fn debug_threshold_passes_everything() {
    let mut console = LeveledConsole::new(RecordingConsole::new(), "DEBUG");
    console.log(&[&"l"]);
    console.debug(&[&"d"]);
    console.info(&[&"i"]);
    console.warn(&[&"w"]);
    console.error(&[&"e"]);

    assert_eq!(console.sink().channel_calls(), 5);
}

// ============================================================================
// Properties
// ============================================================================

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn leveled_call_forwarded_iff_rank_reaches_threshold(
        threshold in any_level(),
        level in any_level(),
    ) {
        let mut console = LeveledConsole::with_level(RecordingConsole::new(), threshold);
        emit_once(&mut console, level);
        prop_assert_eq!(
            recorded_for(console.sink(), level) == 1,
            level.rank() >= threshold.rank()
        );
    }

    #[test]
    fn unknown_names_default_to_debug_with_one_notice(name in "[a-zA-Z]{0,12}") {
        prop_assume!(name.parse::<LogLevel>().is_err());

        let console = LeveledConsole::new(RecordingConsole::new(), &name);
        prop_assert_eq!(console.log_level(), LogLevel::Debug);
        prop_assert_eq!(console.sink().debugs.len(), 1);
        prop_assert_eq!(console.sink().channel_calls(), 1);
    }

    #[test]
    fn rejected_updates_keep_threshold(start in any_level(), name in "[a-z]{1,8}") {
        let mut console = LeveledConsole::with_level(RecordingConsole::new(), start);
        console.set_log_level(&name);
        prop_assert_eq!(console.log_level(), start);
        prop_assert_eq!(console.sink().errors.len(), 1);
    }

    #[test]
    fn pass_through_count_is_independent_of_threshold(
        threshold in any_level(),
        calls in 0usize..16,
    ) {
        let mut console = LeveledConsole::with_level(RecordingConsole::new(), threshold);
        for _ in 0..calls {
            console.count(None);
        }
        prop_assert_eq!(console.sink().calls.len(), calls);
    }
}
