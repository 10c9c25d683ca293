//! Non-interactive UI for unattended and headless runs.

use crate::error::Result;
use crate::packages::PackageSpec;

use super::{OutputMode, ProgressSpinner, UserInterface};

/// UI implementation for unattended mode and non-TTY environments.
///
/// Prompts are never shown: package selection yields nothing (the
/// unattended runner builds its own selection) and confirmations take
/// their default answer. Spinners are suppressed since they produce
/// noisy output in log-based environments.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str, subtitle: &str) {
        if self.mode.shows_status() {
            println!("{} - {}", title, subtitle);
        }
    }

    fn select_packages(&mut self, _packages: &[PackageSpec]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> ProgressSpinner {
        if self.mode.shows_status() {
            println!("{}...", message);
        }
        ProgressSpinner::hidden()
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
