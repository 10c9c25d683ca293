//! Shell command execution.
//!
//! Every invocation is synchronous: the calling thread blocks until the
//! external process exits and its exit code has been captured. Installers
//! frequently compete for machine-wide locks (MSI mutexes, package-manager
//! lock files), so nothing here runs in parallel.

use crate::error::{DeployError, Result};
use std::process::{Command, Stdio};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when output was inherited).
    pub stdout: String,

    /// Captured standard error (empty when output was inherited).
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a command line through the system shell.
///
/// With `capture` set, stdout/stderr are collected into the result;
/// otherwise the child inherits the terminal so the user sees installer
/// output live. Failure to start the process is an error; a non-zero
/// exit is a normal `CommandResult` with `success == false`.
pub fn execute(command: &str, capture: bool) -> Result<CommandResult> {
    let mut cmd = Command::new(shell_binary());
    cmd.arg(shell_flag());
    cmd.arg(command);

    if capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| DeployError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Execute a command line and report only success/failure.
///
/// A command that cannot even be started counts as failure. Manager
/// detection relies on this: a missing tool must read as "not installed",
/// never as an error.
pub fn execute_check(command: &str) -> bool {
    execute(command, true).map(|r| r.success).unwrap_or(false)
}

/// Execute a program directly with an argument list, bypassing the shell.
///
/// Used for fixed invocations (PowerShell bootstrap scripts, `winget list`)
/// where the arguments must not go through shell word splitting.
pub fn execute_program(program: &str, args: &[&str], capture: bool) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| DeployError::CommandFailed {
        command: format!("{} {}", program, args.join(" ")),
        code: None,
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

fn shell_binary() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
