//! Sherpa - build, deploy, and remove serverless apps from the command line.
//!
//! Sherpa is the CLI front door for apps built on the AWS CDK. It parses a
//! small set of subcommands, stages the app build directory, and either
//! runs the in-process build/deploy/remove routines or forwards raw
//! arguments to a child process (`test`, `cdk`), translating the child's
//! termination into the parent's exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and dispatch
//! - [`config`] - App configuration and build preparation
//! - [`error`] - Error types and result aliases
//! - [`proc`] - Child process launching and exit translation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use sherpa::config::{prepare, ProjectPaths};
//!
//! let temp = tempfile::tempdir().unwrap();
//! std::fs::write(temp.path().join("sherpa.json"), r#"{ "name": "my-app" }"#).unwrap();
//!
//! let paths = ProjectPaths::resolve(temp.path());
//! let config = prepare(&paths, Some("prod"), None).unwrap();
//! assert_eq!(config.stage, "prod");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod proc;
pub mod ui;

pub use error::{Result, SherpaError};
