//! Child process launching and exit translation.

pub mod launch;

pub use launch::{display_command, run_inherited, signal_diagnostic, ExitOutcome};
