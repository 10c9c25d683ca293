//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for unattended/headless runs
//! - Prompts, spinners, and themed output

pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DeployTheme};

use crate::error::Result;
use crate::packages::PackageSpec;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests and swapping the interactive
/// prompts for fixed answers in unattended mode.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show the application banner.
    fn show_header(&mut self, title: &str, subtitle: &str);

    /// Let the user pick packages; returns the chosen display names.
    fn select_packages(&mut self, packages: &[PackageSpec]) -> Result<Vec<String>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> ProgressSpinner;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Mock UI for unit tests: records output, answers prompts from a script.
#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Default)]
    pub struct MockUI {
        pub messages: Vec<String>,
        pub warnings: Vec<String>,
        pub errors: Vec<String>,
        pub selection: Vec<String>,
        pub confirm_answer: bool,
    }

    impl MockUI {
        pub fn new() -> Self {
            Self {
                confirm_answer: true,
                ..Default::default()
            }
        }
    }

    impl UserInterface for MockUI {
        fn output_mode(&self) -> OutputMode {
            OutputMode::Normal
        }

        fn message(&mut self, msg: &str) {
            self.messages.push(msg.to_string());
        }

        fn success(&mut self, msg: &str) {
            self.messages.push(msg.to_string());
        }

        fn warning(&mut self, msg: &str) {
            self.warnings.push(msg.to_string());
        }

        fn error(&mut self, msg: &str) {
            self.errors.push(msg.to_string());
        }

        fn show_header(&mut self, _title: &str, _subtitle: &str) {}

        fn select_packages(&mut self, _packages: &[PackageSpec]) -> Result<Vec<String>> {
            Ok(self.selection.clone())
        }

        fn confirm(&mut self, _question: &str, _default: bool) -> Result<bool> {
            Ok(self.confirm_answer)
        }

        fn start_spinner(&mut self, _message: &str) -> ProgressSpinner {
            ProgressSpinner::hidden()
        }

        fn is_interactive(&self) -> bool {
            true
        }
    }
}
