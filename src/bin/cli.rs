use std::ffi::OsString;
use std::fmt;
use std::io::Write;
use std::process::ExitCode;

use cconsole::{ConsoleConfig, LeveledConsole};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console_sink::{ColorChoice, StdConsole};

const CHANNELS: [&str; 5] = ["log", "debug", "info", "warn", "error"];
const USAGE_EXIT: u8 = 2;

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("cconsole")
        .about("Print a message through the leveled console.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .value_name("LEVEL")
                .help("Threshold name (DEBUG, INFO, WARN or ERROR). Overrides CCONSOLE_LOG_LEVEL.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Style the level tag: auto, always or never.")
                .value_parser(["auto", "always", "never"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("channel")
                .value_name("CHANNEL")
                .help("Channel to write to.")
                .value_parser(CHANNELS)
                .required(true),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Values to print, separated by spaces.")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

/// Parses `args`, writes the message through a [`LeveledConsole`] over the
/// given streams and returns the process status.
///
/// Usage errors are printed to `stderr` and exit with status 2. Help and
/// version output go to `stdout`.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    run_with_config(args, ConsoleConfig::from_env(), stdout, stderr)
}

/// Same as [`run_with`] with an explicit base configuration.
pub fn run_with_config<I, Out, Err>(
    args: I,
    base: ConsoleConfig,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    let config = base.merge(
        matches.get_one::<String>("log-level").cloned(),
        matches
            .get_one::<String>("color")
            .and_then(|value| value.parse::<ColorChoice>().ok()),
    );
    let choice = if config.color().should_style() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };

    {
        let sink = StdConsole::with_writers(&mut *stdout, &mut *stderr, choice);
        let mut console = LeveledConsole::from_config(sink, &config);
        dispatch(&mut console, &matches);
    }

    let _ = stdout.flush();
    let _ = stderr.flush();
    ExitCode::SUCCESS
}

fn dispatch<O: Write, E: Write>(
    console: &mut LeveledConsole<StdConsole<O, E>>,
    matches: &ArgMatches,
) {
    let message: Vec<&String> = matches
        .get_many::<String>("message")
        .map(Iterator::collect)
        .unwrap_or_default();
    let args: Vec<&dyn fmt::Display> = message
        .iter()
        .map(|value| *value as &dyn fmt::Display)
        .collect();

    match matches.get_one::<String>("channel").map(String::as_str) {
        Some("log") => console.log(&args),
        Some("debug") => console.debug(&args),
        Some("info") => console.info(&args),
        Some("warn") => console.warn(&args),
        Some("error") => console.error(&args),
        _ => {}
    }
}

fn report_usage<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode {
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = stdout.write_all(rendered.as_bytes());
            ExitCode::SUCCESS
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            ExitCode::from(USAGE_EXIT)
        }
    }
}
