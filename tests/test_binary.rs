//! End-to-end checks of the `demo-api-client` binary

use std::process::{Command, Output};
use tempfile::TempDir;

const LOG_VARS: [&str; 5] = ["LOG_LEVEL", "LOG_FORMAT", "LOG_SPANS", "RUST_LOG", "DEMO_LOG_LEVEL"];

/// Run the binary in an empty directory with no logging overrides in the environment
fn run_binary(args: &[&str], env: &[(&str, &str)]) -> Output {
    let dir = TempDir::new().unwrap();
    let mut command = Command::new(env!("CARGO_BIN_EXE_demo-api-client"));
    command.current_dir(dir.path()).args(args);
    for var in LOG_VARS {
        command.env_remove(var);
    }
    command.envs(env.iter().copied());
    command.output().expect("Failed to execute demo-api-client")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_run_sends_foo_then_bar() {
    let output = run_binary(&[], &[]);
    let stderr = stderr_of(&output);

    assert!(output.status.success(), "stderr: {stderr}");

    let texts: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("DEBUG DemoApiClient:"))
        .filter_map(|line| line.splitn(3, ' ').nth(2))
        .collect();
    assert_eq!(
        texts,
        vec!["construct", "connect", "send foo", "close", "construct", "connect", "send bar", "close"]
    );
}

#[test]
fn test_run_subcommand_sends_given_messages() {
    let output = run_binary(&["run", "hello"], &[]);
    let stderr = stderr_of(&output);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains(" send hello"));
    assert!(!stderr.contains(" send foo"));
}

#[test]
fn test_log_level_flag_beats_log_level_env() {
    let output = run_binary(&["--log-level", "DEBUG"], &[("LOG_LEVEL", "ERROR")]);
    let stderr = stderr_of(&output);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains(" send foo"), "stderr: {stderr}");
}

#[test]
fn test_log_level_env_applies_without_flag() {
    let output = run_binary(&[], &[("LOG_LEVEL", "ERROR")]);
    let stderr = stderr_of(&output);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(!stderr.contains("DemoApiClient"), "stderr: {stderr}");
}

#[test]
fn test_unknown_log_level_flag_exits_with_error() {
    let output = run_binary(&["--log-level", "LOUD"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("LOUD"));
}

#[test]
fn test_config_show_prints_effective_configuration() {
    let output = run_binary(&["config", "--show"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[logging]"));
    assert!(stdout.contains("\"foo\""));
}
