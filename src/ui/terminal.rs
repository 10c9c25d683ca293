//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::packages::PackageSpec;

use super::{
    prompts, should_use_colors, DeployTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DeployTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DeployTheme::new()
        } else {
            DeployTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str, subtitle: &str) {
        if self.mode.shows_status() {
            writeln!(
                self.term,
                "\n{}\n",
                self.theme.format_header(title, subtitle)
            )
            .ok();
        }
    }

    fn select_packages(&mut self, packages: &[PackageSpec]) -> Result<Vec<String>> {
        prompts::select_packages(packages, &self.term)
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        prompts::confirm(question, default, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> ProgressSpinner {
        if self.mode.shows_spinners() {
            ProgressSpinner::new(message)
        } else {
            ProgressSpinner::hidden()
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
