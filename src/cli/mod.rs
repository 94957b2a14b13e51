//! Command-line interface for Sherpa.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, DeployArgs, ForwardArgs, RemoveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
