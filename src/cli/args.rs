//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser, Subcommand};

/// Sherpa - build, deploy, and remove serverless apps.
#[derive(Debug, Parser)]
#[command(name = "sherpa")]
#[command(author, about, long_about = None)]
#[command(version, disable_version_flag = true)]
#[command(arg_required_else_help = false)]
#[command(after_help = "\
Examples:
  sherpa build                                   Build using defaults
  sherpa remove my-s3-stack                      Remove a specific stack
  sherpa deploy --stage prod --region us-west-1  Deploy to a stage and region

For more information, visit https://docs.sherpa.dev")]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build your app and prepare to deploy
    Build(BuildArgs),

    /// Deploy your app to AWS
    Deploy(DeployArgs),

    /// Remove your app and all its resources
    Remove(RemoveArgs),

    /// Run your tests
    Test(ForwardArgs),

    /// Access the AWS CDK CLI
    Cdk(ForwardArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// The stage you want to deploy to
    #[arg(long)]
    pub stage: Option<String>,

    /// The region you want to deploy to
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for the `deploy` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeployArgs {
    /// Specify a stack, if you have multiple stacks
    pub stack: Option<String>,

    /// The stage you want to deploy to
    #[arg(long)]
    pub stage: Option<String>,

    /// The region you want to deploy to
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RemoveArgs {
    /// Specify a stack, if you have multiple stacks
    pub stack: Option<String>,

    /// The stage you want to deploy to
    #[arg(long)]
    pub stage: Option<String>,

    /// The region you want to deploy to
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for the passthrough commands (`test`, `cdk`).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ForwardArgs {
    /// Arguments forwarded verbatim to the child process
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
