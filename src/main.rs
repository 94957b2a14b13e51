//! Sherpa CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use console::style;
use sherpa::cli::{Cli, CommandDispatcher};
use sherpa::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("sherpa=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sherpa=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Report a usage error: the message in red followed by the full help
/// text. Always exits 1.
fn usage_failure(err: &clap::Error) -> ExitCode {
    let rendered = err.to_string();
    let message = rendered.lines().next().unwrap_or("invalid usage");
    eprintln!("{}\n", style(message).red());

    let mut cmd = Cli::command();
    let _ = cmd.print_help();

    ExitCode::from(1)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => return usage_failure(&err),
    };

    init_tracing(cli.debug);
    tracing::debug!("Sherpa starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let mut ui = TerminalUI::new();
    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
