//! Remove command implementation.
//!
//! `sherpa remove [stack]` tears down one stack, or the whole app when no
//! stack is named. `--force` skips the toolchain's own confirmation since
//! the user already asked for the removal.

use crate::cli::args::RemoveArgs;
use crate::config::{BuildConfig, ProjectPaths};
use crate::error::{Result, SherpaError};
use crate::proc::{display_command, run_inherited, signal_diagnostic, ExitOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    paths: ProjectPaths,
    args: RemoveArgs,
    config: BuildConfig,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(paths: &ProjectPaths, args: RemoveArgs, config: BuildConfig) -> Self {
        Self {
            paths: paths.clone(),
            args,
            config,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RemoveArgs {
        &self.args
    }

    fn toolchain_args(&self) -> Vec<String> {
        let mut toolchain_args = vec!["destroy".to_string()];
        match &self.args.stack {
            Some(stack) => toolchain_args.push(stack.clone()),
            None => toolchain_args.push("--all".to_string()),
        }
        toolchain_args.push("--force".to_string());
        toolchain_args
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.stack {
            Some(stack) => ui.message(&format!(
                "Removing {} from stage {}",
                stack, self.config.stage
            )),
            None => ui.message(&format!(
                "Removing {} from stage {}",
                self.config.name, self.config.stage
            )),
        }

        let bin = self.paths.cdk_bin();
        let toolchain_args = self.toolchain_args();
        let outcome = run_inherited(&bin, &toolchain_args, Some(&self.paths.build_path))?;

        match outcome {
            ExitOutcome::Exited(0) => {
                ui.success("Remove complete");
                Ok(CommandResult::success())
            }
            ExitOutcome::Exited(code) => Err(SherpaError::CommandFailed {
                command: display_command(&bin, &toolchain_args),
                code: Some(code),
            }),
            ExitOutcome::Signaled(signal) => {
                ui.message(&signal_diagnostic(signal));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
