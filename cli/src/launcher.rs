//! Activation of result items
//!
//! Commands run through `sh -c`, files open with the desktop opener. Both are
//! spawned detached with null stdio so the launched program outlives the CLI.

use scout_core::{InvokeToken, LaunchError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Program used to open files with their default application
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Trait for activating a result item
pub trait Launcher {
    fn launch(&self, invoke: &InvokeToken) -> Result<()>;
}

/// Spawns a detached process for each activation
#[derive(Debug, Clone)]
pub struct DetachedLauncher {
    opener: String,
}

impl Default for DetachedLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_OPENER)
    }
}

impl DetachedLauncher {
    pub fn new(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }

    fn run_command(&self, exec: &str) -> Result<()> {
        let command = strip_field_codes(exec);
        if command.is_empty() {
            return Err(LaunchError::CouldNotLaunch {
                target: exec.to_string(),
                message: "empty command".to_string(),
            }
            .into());
        }

        debug!("Running command: {}", command);
        spawn_detached("sh", ["-c", command.as_str()]).map_err(|e| {
            LaunchError::CouldNotLaunch {
                target: command.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn open_path(&self, path: &Path) -> Result<()> {
        let opener = which::which(&self.opener).map_err(|_| LaunchError::NoOpener {
            target: path.display().to_string(),
        })?;

        debug!("Opening {} with {}", path.display(), opener.display());
        spawn_detached(&opener, [path.as_os_str()]).map_err(|e| {
            LaunchError::CouldNotLaunch {
                target: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl Launcher for DetachedLauncher {
    fn launch(&self, invoke: &InvokeToken) -> Result<()> {
        match invoke {
            InvokeToken::Command(exec) => self.run_command(exec)?,
            InvokeToken::Open(path) => self.open_path(path)?,
        }
        info!("Launched {}", invoke.target());
        Ok(())
    }
}

/// Remove desktop entry field codes such as `%u` or `%F` from a command line
pub fn strip_field_codes(exec: &str) -> String {
    exec.split_whitespace()
        .filter(|token| !is_field_code(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_field_code(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('%'), Some(c), None) if c.is_ascii_alphabetic()
    )
}

fn spawn_detached<I, S>(program: impl AsRef<OsStr>, args: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Own process group so terminal signals aimed at the CLI skip the child
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    cmd.spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_strip_field_codes() {
        assert_eq!(strip_field_codes("firefox %u"), "firefox");
        assert_eq!(strip_field_codes("code --new-window %F"), "code --new-window");
        assert_eq!(strip_field_codes("echo 100%"), "echo 100%");
        assert_eq!(strip_field_codes("%f"), "");
    }

    #[test]
    fn test_missing_opener() {
        let launcher = DetachedLauncher::new("scout-test-no-such-opener");
        let err = launcher
            .launch(&InvokeToken::Open(PathBuf::from("/tmp/file.txt")))
            .unwrap_err();

        assert!(matches!(
            err,
            scout_core::Error::Launch(LaunchError::NoOpener { .. })
        ));
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let launcher = DetachedLauncher::default();
        let err = launcher
            .launch(&InvokeToken::Command("%u".to_string()))
            .unwrap_err();

        assert!(matches!(
            err,
            scout_core::Error::Launch(LaunchError::CouldNotLaunch { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_runs_through_shell() {
        let launcher = DetachedLauncher::default();
        assert!(launcher
            .launch(&InvokeToken::Command("true".to_string()))
            .is_ok());
    }
}
