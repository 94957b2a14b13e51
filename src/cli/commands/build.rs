//! Build command implementation.
//!
//! `sherpa build` synthesizes the app in the staged build directory so it
//! is ready to deploy.

use crate::cli::args::BuildArgs;
use crate::config::{BuildConfig, ProjectPaths};
use crate::error::{Result, SherpaError};
use crate::proc::{display_command, run_inherited, signal_diagnostic, ExitOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    paths: ProjectPaths,
    args: BuildArgs,
    config: BuildConfig,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(paths: &ProjectPaths, args: BuildArgs, config: BuildConfig) -> Self {
        Self {
            paths: paths.clone(),
            args,
            config,
        }
    }

    /// Get the project paths.
    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }

    fn toolchain_args(&self) -> Vec<String> {
        vec!["synth".to_string()]
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!(
            "Building {} for stage {}",
            self.config.name, self.config.stage
        ));

        let bin = self.paths.cdk_bin();
        let toolchain_args = self.toolchain_args();
        let outcome = run_inherited(&bin, &toolchain_args, Some(&self.paths.build_path))?;

        match outcome {
            ExitOutcome::Exited(0) => {
                ui.success("Build complete");
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
