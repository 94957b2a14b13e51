//! App configuration and build preparation.
//!
//! - [`paths`] - Project path and toolchain binary resolution
//! - [`prepare`] - Config loading, validation, and build staging

pub mod paths;
pub mod prepare;

pub use paths::{ProjectPaths, CONFIG_FILE};
pub use prepare::{prepare, AppConfig, BuildConfig, DEFAULT_REGION, DEFAULT_STAGE};
