//! Administrator-rights detection and relaunch.
//!
//! Installers mutate machine state, so elevation is checked before anything
//! else runs. When the process is not elevated it relaunches itself under
//! the `runas` verb with the original command line and exits; the caller
//! never observes a "denied" return. A denied or failed relaunch surfaces
//! as [`DeployError::ElevationFailed`] and aborts the run.
//!
//! Domain accounts (username carrying `@` or a backslash) get the
//! `ShellExecuteExW` strategy: it sets the spawned window's show mode
//! explicitly and keeps no handle to the child. Local accounts use the
//! one-shot `ShellExecuteW` call. The domain branch is a heuristic carried
//! over from field reports of UAC prompts never surfacing for roaming
//! profiles, not a guarantee.

use crate::error::Result;

/// Whether the current process already has administrative rights.
pub fn is_elevated() -> bool {
    #[cfg(windows)]
    {
        // SAFETY: IsUserAnAdmin reads the process token and touches no
        // caller-owned memory.
        unsafe { windows_sys::Win32::UI::Shell::IsUserAnAdmin() != 0 }
    }

    #[cfg(unix)]
    {
        // SAFETY: geteuid is a simple syscall returning the effective uid.
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(any(windows, unix)))]
    {
        false
    }
}

/// Whether the invoking account looks like a domain account.
pub fn is_domain_account() -> bool {
    is_domain_username(&std::env::var("USERNAME").unwrap_or_default())
}

fn is_domain_username(username: &str) -> bool {
    username.contains('@') || username.contains('\\')
}

/// Ensure the process runs elevated, relaunching it if necessary.
///
/// On Windows this returns normally only when already elevated; otherwise
/// the relaunched process takes over and the current one exits. On other
/// hosts elevation is a pass-through so the orchestration stays runnable
/// for development and tests.
pub fn ensure_elevated() -> Result<()> {
    if is_elevated() {
        tracing::debug!("process already elevated");
        return Ok(());
    }

    #[cfg(windows)]
    {
        relaunch_elevated()?;
        // The elevated child owns the run from here.
        std::process::exit(0);
    }

    #[cfg(not(windows))]
    {
        tracing::debug!("non-Windows host, skipping elevation");
        Ok(())
    }
}

#[cfg(windows)]
fn relaunch_elevated() -> Result<()> {
    use crate::error::DeployError;

    let exe = std::env::current_exe().map_err(|e| DeployError::ElevationFailed {
        message: format!("cannot resolve current executable: {e}"),
    })?;
    let params = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    if is_domain_account() {
        tracing::debug!("domain account detected, using ShellExecuteExW");
        relaunch_shell_execute_ex(&exe, &params)
    } else {
        relaunch_shell_execute(&exe, &params)
    }
}

#[cfg(windows)]
fn wide(s: &std::ffi::OsStr) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    s.encode_wide().chain(std::iter::once(0)).collect()
}

/// One-shot relaunch for local accounts.
#[cfg(windows)]
fn relaunch_shell_execute(exe: &std::path::Path, params: &str) -> Result<()> {
    use crate::error::DeployError;
    use windows_sys::Win32::UI::Shell::ShellExecuteW;
    use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

    let verb = wide("runas".as_ref());
    let file = wide(exe.as_os_str());
    let arguments = wide(params.as_ref());

    // SAFETY: all pointers reference NUL-terminated buffers that outlive
    // the call.
    let instance = unsafe {
        ShellExecuteW(
            std::ptr::null_mut(),
            verb.as_ptr(),
            file.as_ptr(),
            arguments.as_ptr(),
            std::ptr::null(),
            SW_SHOWNORMAL,
        )
    };

    // Per the ShellExecute contract, values <= 32 are error codes.
    if instance as usize <= 32 {
        return Err(DeployError::ElevationFailed {
            message: format!("ShellExecuteW returned {}", instance as usize),
        });
    }
    Ok(())
}

/// Relaunch via ShellExecuteExW with explicit window visibility and no
/// retained process handle. Used for domain accounts.
#[cfg(windows)]
fn relaunch_shell_execute_ex(exe: &std::path::Path, params: &str) -> Result<()> {
    use crate::error::DeployError;
    use windows_sys::Win32::UI::Shell::{ShellExecuteExW, SHELLEXECUTEINFOW};
    use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOW;

    let verb = wide("runas".as_ref());
    let file = wide(exe.as_os_str());
    let arguments = wide(params.as_ref());

    // SAFETY: zeroed is valid for this plain-data struct; cbSize tells the
    // API which revision we filled in.
    let mut info: SHELLEXECUTEINFOW = unsafe { std::mem::zeroed() };
    info.cbSize = std::mem::size_of::<SHELLEXECUTEINFOW>() as u32;
    info.lpVerb = verb.as_ptr();
    info.lpFile = file.as_ptr();
    info.lpParameters = arguments.as_ptr();
    info.nShow = SW_SHOW as i32;

    // SAFETY: info and the buffers it points at outlive the call.
    let ok = unsafe { ShellExecuteExW(&mut info) };
    if ok == 0 {
        return Err(DeployError::ElevationFailed {
            message: std::io::Error::last_os_error().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upn_username_is_domain_account() {
        assert!(is_domain_username("alice@corp.example.com"));
    }

    #[test]
    fn netbios_username_is_domain_account() {
        assert!(is_domain_username("CORP\\alice"));
    }

    #[test]
    fn plain_username_is_local_account() {
        assert!(!is_domain_username("alice"));
        assert!(!is_domain_username(""));
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }
}
