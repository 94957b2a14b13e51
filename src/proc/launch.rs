//! Synchronous child process execution.
//!
//! The launcher spawns one child with inherited stdio, waits for it, and
//! reports how it terminated. Killed-by-signal is kept distinct from a
//! normal exit so callers can explain the difference to the user.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, SherpaError};

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with a status code.
    Exited(i32),

    /// Killed by a signal (Unix only).
    Signaled(i32),
}

/// Spawn a child process with inherited stdio and wait for it to finish.
///
/// The parent's stdin/stdout/stderr are passed straight through, so the
/// child's output reaches the terminal unmodified.
pub fn run_inherited(program: &Path, args: &[String], cwd: Option<&Path>) -> Result<ExitOutcome> {
    tracing::debug!("running {}", display_command(program, args));

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let status = cmd.status().map_err(|source| SherpaError::SpawnFailed {
        program: program.display().to_string(),
        source,
    })?;

    if let Some(code) = status.code() {
        return Ok(ExitOutcome::Exited(code));
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Ok(ExitOutcome::Signaled(signal));
        }
    }

    // A status with neither code nor signal; report it as a plain failure.
    Ok(ExitOutcome::Exited(1))
}

/// Render a program and its arguments for error messages and logs.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Human-readable explanation for a signal-terminated child.
#[cfg(unix)]
pub fn signal_diagnostic(signal: i32) -> String {
    match signal {
        libc::SIGKILL => "The command failed because the process exited too early. \
             This probably means the system ran out of memory or someone called \
             `kill -9` on the process."
            .to_string(),
        libc::SIGTERM => "The command failed because the process exited too early. \
             Someone might have called `kill` or `killall`, or the system could \
             be shutting down."
            .to_string(),
        other => format!("The command was terminated by signal {other}."),
    }
}

/// Human-readable explanation for a signal-terminated child.
#[cfg(not(unix))]
pub fn signal_diagnostic(signal: i32) -> String {
    format!("The command was terminated by signal {signal}.")
}
