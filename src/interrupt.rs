//! Process-level Ctrl-C handling.
//!
//! Prompts run the terminal in raw mode and surface Ctrl-C themselves as
//! [`crate::DeployError::Cancelled`]. Outside a prompt the process would
//! die on the default SIGINT disposition, mid-bootstrap or mid-install,
//! with no acknowledgement and a failure status. The handler installed
//! here covers those phases: it prints the same acknowledgement the
//! prompt path produces and exits with success. A half-finished external
//! installer is the expected state after an interrupt; the next run
//! re-detects what actually landed.

use crate::ui::DeployTheme;

/// Install the Ctrl-C handler for the rest of the process lifetime.
///
/// Failing to install the handler is logged, not fatal: the run still
/// works, it just dies unacknowledged on an interrupt.
pub fn install_handler() {
    let result = ctrlc::set_handler(|| {
        let theme = DeployTheme::new();
        eprintln!("\n{}", theme.format_warning("Interrupted by user."));
        std::process::exit(0);
    });

    if let Err(err) = result {
        tracing::warn!("could not install Ctrl-C handler: {err}");
    }
}
