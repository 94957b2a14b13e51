//! Terminal output implementation.

use console::style;

use super::UserInterface;

/// Terminal-backed output. Messages go to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct TerminalUI;

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn success(&mut self, msg: &str) {
        println!("{}", style(msg).green());
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", style(msg).yellow());
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }
}
