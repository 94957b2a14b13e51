//! Deploy command implementation.
//!
//! `sherpa deploy [stack]` deploys one stack, or every stack when none is
//! named. Approval prompts are disabled; the command is expected to run
//! unattended.

use crate::cli::args::DeployArgs;
use crate::config::{BuildConfig, ProjectPaths};
use crate::error::{Result, SherpaError};
use crate::proc::{display_command, run_inherited, signal_diagnostic, ExitOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The deploy command implementation.
pub struct DeployCommand {
    paths: ProjectPaths,
    args: DeployArgs,
    config: BuildConfig,
}

impl DeployCommand {
    /// Create a new deploy command.
    pub fn new(paths: &ProjectPaths, args: DeployArgs, config: BuildConfig) -> Self {
        Self {
            paths: paths.clone(),
            args,
            config,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DeployArgs {
        &self.args
    }

    fn toolchain_args(&self) -> Vec<String> {
        let mut toolchain_args = vec!["deploy".to_string()];
        match &self.args.stack {
            Some(stack) => toolchain_args.push(stack.clone()),
            None => toolchain_args.push("--all".to_string()),
        }
        toolchain_args.push("--require-approval".to_string());
        toolchain_args.push("never".to_string());
        toolchain_args
    }
}

impl Command for DeployCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.stack {
            Some(stack) => ui.message(&format!(
                "Deploying {} to stage {} ({})",
                stack, self.config.stage, self.config.region
            )),
            None => ui.message(&format!(
                "Deploying {} to stage {} ({})",
                self.config.name, self.config.stage, self.config.region
            )),
        }

        let bin = self.paths.cdk_bin();
        let toolchain_args = self.toolchain_args();
        let outcome = run_inherited(&bin, &toolchain_args, Some(&self.paths.build_path))?;

        match outcome {
            ExitOutcome::Exited(0) => {
                ui.success("Deployment complete");
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn deploy_command(stack: Option<&str>) -> (TempDir, DeployCommand) {
        let temp = TempDir::new().unwrap();
        let paths = ProjectPaths::resolve(temp.path());
        let args = DeployArgs {
            stack: stack.map(str::to_string),
            ..Default::default()
        };
        let config = BuildConfig {
            name: "my-app".to_string(),
            stage: "dev".to_string(),
            region: "us-east-1".to_string(),
        };
        let cmd = DeployCommand::new(&paths, args, config);
        (temp, cmd)
    }

    #[test]
    fn deploy_named_stack() {
        let (_temp, cmd) = deploy_command(Some("my-s3-stack"));
        assert_eq!(
            cmd.toolchain_args(),
            ["deploy", "my-s3-stack", "--require-approval", "never"]
        );
    }

    #[test]
    fn deploy_all_when_no_stack_given() {
        let (_temp, cmd) = deploy_command(None);
        assert_eq!(
            cmd.toolchain_args(),
            ["deploy", "--all", "--require-approval", "never"]
        );
    }

    #[test]
    fn deploy_command_keeps_parsed_stack() {
        let (_temp, cmd) = deploy_command(Some("my-s3-stack"));
        assert_eq!(cmd.args().stack.as_deref(), Some("my-s3-stack"));
    }
}
