//! Handing URIs to the operating system
//!
//! On a phone this is what makes a UPI app pop up. On a desktop there may be
//! no handler at all, so failures are reported but never fatal.

use std::process::{Command, Stdio};
use std::thread;

use crate::error::{CheckoutError, CheckoutResult};

/// Something that can open a URI in an external application
pub trait UriLauncher {
    fn launch(&self, uri: &str) -> CheckoutResult<()>;
}

/// Opens URIs with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    #[cfg(target_os = "macos")]
    fn command(uri: &str) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        cmd
    }

    // Not `cmd /C start`: cmd.exe would split the URI at every `&`
    #[cfg(windows)]
    fn command(uri: &str) -> Command {
        let mut cmd = Command::new("explorer.exe");
        cmd.arg(uri);
        cmd
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(uri: &str) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        cmd
    }
}

/// Start `cmd` without waiting for it; its exit is logged from a reaper thread
fn spawn_detached(mut cmd: Command) -> CheckoutResult<()> {
    // Output would scribble over the TUI
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| CheckoutError::Launch(e.to_string()))?;

    thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => tracing::debug!("link handler exited"),
        Ok(status) => tracing::warn!(%status, "link handler reported a failure"),
        Err(e) => tracing::warn!(error = %e, "could not wait for link handler"),
    });
    Ok(())
}

impl UriLauncher for SystemLauncher {
    fn launch(&self, uri: &str) -> CheckoutResult<()> {
        spawn_detached(Self::command(uri))?;
        tracing::debug!("payment link handed to the system");
        Ok(())
    }
}

/// Launcher that leaves the URI alone
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLauncher;

impl UriLauncher for NoopLauncher {
    fn launch(&self, _uri: &str) -> CheckoutResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "upi://pay?pa=kiransinghpay@axl&pn=Kiran%20Singh&am=8999&cu=INR";

    #[test]
    fn test_noop_launcher() {
        assert!(NoopLauncher.launch("upi://pay?pa=a@b").is_ok());
    }

    #[test]
    fn test_uri_is_a_single_argument() {
        let cmd = SystemLauncher::command(LINK);
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, [LINK]);
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_does_not_go_through_cmd() {
        let cmd = SystemLauncher::command(LINK);
        assert_eq!(cmd.get_program(), "explorer.exe");
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_does_not_wait_for_handler() {
        let mut slow = Command::new("sleep");
        slow.arg("5");

        let started = std::time::Instant::now();
        spawn_detached(slow).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_missing_handler_is_a_launch_error() {
        let err = spawn_detached(Command::new("upi-checkout-no-such-handler")).unwrap_err();
        assert!(matches!(err, CheckoutError::Launch(_)));
    }
}
