//! Passthrough command implementation.
//!
//! `sherpa cdk [...]` and `sherpa test [...]` hand their raw arguments to
//! a child process with inherited stdio. The child's exit status is
//! propagated unchanged; a signal-terminated child is reported with a
//! diagnostic and exit code 1.

use std::path::PathBuf;

use crate::config::ProjectPaths;
use crate::error::Result;
use crate::proc::{run_inherited, signal_diagnostic, ExitOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The passthrough command implementation.
pub struct ForwardCommand {
    program: PathBuf,
    forwarded: Vec<String>,
    cwd: PathBuf,
}

impl ForwardCommand {
    /// Forward raw arguments to the underlying CDK CLI.
    pub fn cdk(paths: &ProjectPaths, forwarded: Vec<String>) -> Self {
        Self {
            program: paths.cdk_bin(),
            forwarded,
            cwd: paths.app_path.clone(),
        }
    }

    /// Forward raw arguments to the app's test runner.
    pub fn test(paths: &ProjectPaths, forwarded: Vec<String>) -> Self {
        let (program, forwarded) = test_invocation(forwarded);
        Self {
            program,
            forwarded,
            cwd: paths.app_path.clone(),
        }
    }

    /// The program this command will spawn.
    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    /// The arguments the child will receive.
    pub fn forwarded(&self) -> &[String] {
        &self.forwarded
    }
}

/// Resolve the test runner invocation.
///
/// `SHERPA_TEST_RUNNER` gets the forwarded arguments verbatim; the default
/// `npm test` needs extra arguments separated with `--` so npm passes them
/// through to the underlying test script.
fn test_invocation(extra: Vec<String>) -> (PathBuf, Vec<String>) {
    if let Ok(runner) = std::env::var("SHERPA_TEST_RUNNER") {
        return (PathBuf::from(runner), extra);
    }

    let mut forwarded = vec!["test".to_string()];
    if !extra.is_empty() {
        forwarded.push("--".to_string());
        forwarded.extend(extra);
    }
    (PathBuf::from("npm"), forwarded)
}

impl Command for ForwardCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = run_inherited(&self.program, &self.forwarded, Some(&self.cwd))?;

        match outcome {
            ExitOutcome::Exited(0) => Ok(CommandResult::success()),
            ExitOutcome::Exited(code) => Ok(CommandResult::failure(code)),
            ExitOutcome::Signaled(signal) => {
                ui.message(&signal_diagnostic(signal));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
