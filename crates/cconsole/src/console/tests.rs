use super::*;
use console_sink::{DirOptions, RecordedCall, RecordingConsole};

fn recording(level: &str) -> LeveledConsole<RecordingConsole> {
    LeveledConsole::new(RecordingConsole::new(), level)
}

#[test]
fn valid_names_set_threshold_silently() {
    for level in LogLevel::ALL {
        let console = recording(level.name());
        assert_eq!(console.log_level(), level);
        assert_eq!(console.sink().channel_calls(), 0);
    }
}

#[test]
fn invalid_name_defaults_to_debug_with_one_notice() {
    let console = recording("INVALID");
    assert_eq!(console.log_level(), LogLevel::Debug);

    let sink = console.sink();
    assert_eq!(sink.debugs.len(), 1);
    assert_eq!(sink.channel_calls(), 1);
    assert_eq!(sink.debugs[0][0], "%c[DEBUG]");
    assert_eq!(sink.debugs[0][1], "color:green");
    assert!(sink.debugs[0][2].contains("invalid log level \"INVALID\""));
    assert!(sink.debugs[0][2].contains("defaulting to \"DEBUG\""));
}

#[test]
fn lowercase_names_are_invalid() {
    let console = recording("info");
    assert_eq!(console.log_level(), LogLevel::Debug);
    assert_eq!(console.sink().debugs.len(), 1);
}

#[test]
fn info_threshold_suppresses_debug_only() {
    let mut console = recording("INFO");
    console.debug(&[&"x"]);
    console.info(&[&"y"]);
    console.warn(&[&"w"]);
    console.error(&[&"e"]);

    let sink = console.sink();
    assert!(sink.debugs.is_empty());
    assert_eq!(sink.infos.len(), 1);
    assert!(sink.infos[0][0].contains("[INFO]"));
    assert_eq!(sink.warns, vec![vec!["%c[WARN]", "color:yellow", "w"]]);
    assert_eq!(sink.errors, vec![vec!["%c[ERROR]", "color:red", "e"]]);
}

#[test]
fn log_is_gated_as_info_without_style() {
    let mut console = recording("INFO");
    console.log(&[&"a", &7]);
    console.set_level(LogLevel::Warn);
    console.log(&[&"hidden"]);

    assert_eq!(console.sink().logs, vec![vec!["[LOG]", "a", "7"]]);
}

#[test]
fn set_log_level_takes_effect_for_later_calls() {
    let mut console = recording("INFO");
    console.debug(&[&"initial"]);
    assert!(console.sink().debugs.is_empty());

    console.set_log_level("DEBUG");
    assert_eq!(console.log_level(), LogLevel::Debug);
    console.debug(&[&"z"]);

    let sink = console.sink();
    assert_eq!(sink.debugs.len(), 1);
    assert!(sink.debugs[0][0].contains("[DEBUG]"));
    assert_eq!(sink.debugs[0][2], "z");
}

#[test]
fn set_log_level_rejects_unknown_names() {
    let mut console = recording("WARN");
    console.set_log_level("VERBOSE");

    assert_eq!(console.log_level(), LogLevel::Warn);
    let sink = console.sink();
    assert_eq!(sink.channel_calls(), 1);
    assert_eq!(
        sink.errors,
        vec![vec![
            "%c[ERROR]",
            "color:red",
            "Invalid log level \"VERBOSE\" provided to set_log_level"
        ]]
    );
}

#[test]
fn set_log_level_error_is_visible_at_every_threshold() {
    for level in LogLevel::ALL {
        let mut console = recording(level.name());
        console.set_log_level("nope");
        assert_eq!(console.log_level(), level);
        assert_eq!(console.sink().errors.len(), 1);
    }
}

#[test]
fn assert_emits_only_on_false() {
    let mut console = recording("ERROR");
    console.assert(true, &[&"x"]);
    assert_eq!(console.sink().channel_calls(), 0);

    console.assert(false, &[&"x"]);
    assert_eq!(
        console.sink().errors,
        vec![vec!["%c[ERROR]", "color:red", "Assertion failed", "x"]]
    );
}

#[test]
fn info_falls_back_to_log_without_info_channel() {
    let mut console = LeveledConsole::new(RecordingConsole::minimal(), "DEBUG");
    console.info(&[&"fallback"]);

    let sink = console.sink();
    assert!(sink.infos.is_empty());
    assert_eq!(sink.logs, vec![vec!["%c[INFO]", "color:blue", "fallback"]]);
}

#[test]
fn pass_through_ignores_threshold() {
    let mut console = recording("ERROR");
    console.clear();
    console.count(Some("a"));
    console.count_reset(None);
    console.group(&[&"g"]);
    console.group_collapsed(&[]);
    console.group_end();
    console.time(Some("t"));
    console.time_log(Some("t"), &[&1]);
    console.time_end(Some("t"));
    console.trace(&[&"here"]);
    console.dirxml(&[&"<a/>"]);
    console.table(&[1, 2], Some(&["x"]));
    console.dir(&"obj", Some(DirOptions::default().with_depth(1)));

    assert_eq!(
        console.sink().calls,
        vec![
            RecordedCall::Clear,
            RecordedCall::Count(Some("a".to_owned())),
            RecordedCall::CountReset(None),
            RecordedCall::Group(vec!["g".to_owned()]),
            RecordedCall::GroupCollapsed(vec![]),
            RecordedCall::GroupEnd,
            RecordedCall::Time(Some("t".to_owned())),
            RecordedCall::TimeLog(Some("t".to_owned()), vec!["1".to_owned()]),
            RecordedCall::TimeEnd(Some("t".to_owned())),
            RecordedCall::Trace(vec!["here".to_owned()]),
            RecordedCall::Dirxml(vec!["<a/>".to_owned()]),
            RecordedCall::Table("[1, 2]".to_owned(), Some(vec!["x".to_owned()])),
            RecordedCall::Dir(
                "\"obj\"".to_owned(),
                Some(DirOptions::default().with_depth(1))
            ),
        ]
    );
    assert_eq!(console.sink().channel_calls(), 0);
}

#[test]
fn profiling_forwards_when_available() {
    let mut console = recording("DEBUG");
    console.time_stamp(Some("mark"));
    console.profile(None);
    console.profile_end(None);

    assert_eq!(
        console.sink().calls,
        vec![
            RecordedCall::TimeStamp(Some("mark".to_owned())),
            RecordedCall::Profile(None),
            RecordedCall::ProfileEnd(None),
        ]
    );
}

#[test]
fn profiling_is_silent_on_minimal_sink() {
    let mut console = LeveledConsole::new(RecordingConsole::minimal(), "DEBUG");
    console.time_stamp(Some("mark"));
    console.profile(Some("p"));
    console.profile_end(Some("p"));

    assert!(console.sink().calls.is_empty());
}

#[test]
fn from_config_without_level_is_silent_debug() {
    let console = LeveledConsole::from_config(RecordingConsole::new(), &ConsoleConfig::default());
    assert_eq!(console.log_level(), LogLevel::Debug);
    assert_eq!(console.sink().channel_calls(), 0);
}

#[test]
fn from_config_reports_invalid_level() {
    let config = ConsoleConfig::default().with_level("LOUD");
    let console = LeveledConsole::from_config(RecordingConsole::new(), &config);
    assert_eq!(console.log_level(), LogLevel::Debug);
    assert_eq!(console.sink().debugs.len(), 1);
}

#[test]
fn borrowed_sink_stays_with_caller() {
    let mut sink = RecordingConsole::new();
    {
        let mut console = LeveledConsole::new(&mut sink, "WARN");
        console.warn(&[&"borrowed"]);
        console.info(&[&"dropped"]);
    }
    assert_eq!(sink.warns.len(), 1);
    assert!(sink.infos.is_empty());
}

#[test]
fn debug_output_names_threshold() {
    let console = recording("WARN");
    let rendered = format!("{console:?}");
    assert!(rendered.starts_with("LeveledConsole { threshold: Warn"));
}
