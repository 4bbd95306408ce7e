use assert_cmd::Command;

fn cconsole() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cconsole"));
    command.env_remove("CCONSOLE_LOG_LEVEL").env("NO_COLOR", "1");
    command
}

#[test]
fn cconsole_help_lists_usage() {
    let output = cconsole().arg("--help").output().expect("run cconsole");
    assert!(output.status.success(), "--help should succeed");
    assert!(output.stderr.is_empty(), "help output should not write to stderr");
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("cconsole"));
}

#[test]
fn cconsole_without_channel_is_a_usage_error() {
    cconsole().assert().code(2);
}

#[test]
fn cconsole_writes_info_to_stdout() {
    cconsole()
        .args(["info", "disk", "ok"])
        .assert()
        .success()
        .stdout("[INFO] disk ok\n")
        .stderr("");
}

#[test]
fn cconsole_writes_errors_to_stderr() {
    cconsole()
        .args(["error", "disk", "full"])
        .assert()
        .success()
        .stdout("")
        .stderr("[ERROR] disk full\n");
}

#[test]
fn environment_level_gates_output() {
    cconsole()
        .env("CCONSOLE_LOG_LEVEL", "WARN")
        .args(["info", "hidden"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn flag_overrides_environment_level() {
    cconsole()
        .env("CCONSOLE_LOG_LEVEL", "ERROR")
        .args(["--log-level", "DEBUG", "debug", "shown"])
        .assert()
        .success()
        .stdout("[DEBUG] shown\n");
}

#[test]
fn invalid_environment_level_falls_back_to_debug() {
    cconsole()
        .env("CCONSOLE_LOG_LEVEL", "chatty")
        .args(["debug", "x"])
        .assert()
        .success()
        .stdout(
            "[DEBUG] console instantiated with invalid log level \"chatty\", defaulting to \"DEBUG\"\n[DEBUG] x\n",
        );
}
