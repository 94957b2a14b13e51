//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands
//!
//! The dispatch itself is a static enum-keyed match: `build`, `deploy`,
//! and `remove` run in-process after the preparation step, while `test`
//! and `cdk` forward raw arguments to a child process.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{prepare, ProjectPaths};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// The in-process commands receive the merged [`BuildConfig`] produced
    /// by the preparation step; the passthrough commands get their raw
    /// arguments forwarded untouched.
    ///
    /// [`BuildConfig`]: crate::config::BuildConfig
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = ProjectPaths::resolve(&self.project_root);

        match &cli.command {
            Commands::Build(args) => {
                let config = prepare(&paths, args.stage.as_deref(), args.region.as_deref())?;
                let cmd = super::build::BuildCommand::new(&paths, args.clone(), config);
                cmd.execute(ui)
            }
            Commands::Deploy(args) => {
                let config = prepare(&paths, args.stage.as_deref(), args.region.as_deref())?;
                let cmd = super::deploy::DeployCommand::new(&paths, args.clone(), config);
                cmd.execute(ui)
            }
            Commands::Remove(args) => {
                let config = prepare(&paths, args.stage.as_deref(), args.region.as_deref())?;
                let cmd = super::remove::RemoveCommand::new(&paths, args.clone(), config);
                cmd.execute(ui)
            }
            Commands::Test(args) => {
                let cmd = super::forward::ForwardCommand::test(&paths, args.args.clone());
                cmd.execute(ui)
            }
            Commands::Cdk(args) => {
                let cmd = super::forward::ForwardCommand::cdk(&paths, args.args.clone());
                cmd.execute(ui)
            }
        }
    }
}
