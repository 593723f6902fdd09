//! OS integration: running shell commands, opening URLs and starting files.
//!
//! `run_shell` hands the terminal to a child process, so the TUI leaves
//! raw mode before calling it.

use log::{info, warn};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// The interpreter catalog commands are written for.
#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("powershell");
    cmd.args(["-NoProfile", "-Command", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

fn describe(status: ExitStatus) -> Result<String, String> {
    if status.success() {
        Ok(String::from("Command finished"))
    } else {
        match status.code() {
            Some(code) => Err(format!("Command exited with code {code}")),
            None => Err(String::from("Command was terminated")),
        }
    }
}

/// Side effects on the host system. Every method returns the status line
/// to show on success, or the error message.
pub trait Launcher: Send + Sync {
    /// Runs `command` with the terminal attached and waits for it to exit.
    fn run_shell(&self, command: &str) -> Result<String, String>;
    fn open_url(&self, url: &str) -> Result<String, String>;
    /// Starts a file with its associated application, without waiting.
    fn open_path(&self, path: &Path) -> Result<String, String>;
    fn write_file(&self, path: &Path, content: &str) -> Result<String, String>;
}

pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn run_shell(&self, command: &str) -> Result<String, String> {
        run_shell(command)
    }

    fn open_url(&self, url: &str) -> Result<String, String> {
        open_url(url)
    }

    fn open_path(&self, path: &Path) -> Result<String, String> {
        launch(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<String, String> {
        write_file(path, content)
    }
}

fn run_shell(command: &str) -> Result<String, String> {
    info!("Running shell command: {}", command);
    match shell(command).status() {
        Ok(status) => {
            let result = describe(status);
            if let Err(msg) = &result {
                warn!("{}", msg);
            }
            result
        }
        Err(e) => {
            warn!("Couldn't start shell: {}", e);
            Err(format!("Couldn't start shell: {e}"))
        }
    }
}

fn open_url(url: &str) -> Result<String, String> {
    info!("Opening {} in the browser", url);
    match webbrowser::open(url) {
        Ok(()) => Ok(format!("Opened {url}")),
        Err(e) => Err(format!("Failed to open {url}: {e}")),
    }
}

#[cfg(windows)]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(windows, target_os = "macos")))]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

fn launch(path: &Path) -> Result<String, String> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    info!("Launching {}", path.display());
    match opener(path).spawn() {
        Ok(_) => Ok(format!("Started {name}")),
        Err(e) => {
            warn!("Couldn't start {}: {}", path.display(), e);
            Err(format!("Couldn't start {name}: {e}"))
        }
    }
}

/// Creates parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<String, String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        return Err(format!("Couldn't create {}: {e}", parent.display()));
    }
    match std::fs::write(path, content) {
        Ok(()) => {
            info!("Wrote {}", path.display());
            Ok(format!("Saved {}", path.display()))
        }
        Err(e) => Err(format!("Couldn't write {}: {e}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("links.txt");
        let message = SystemLauncher
            .write_file(&path, "https://example.com")
            .unwrap();
        assert!(message.starts_with("Saved"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "https://example.com");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_shell_reports_exit_code() {
        let launcher = SystemLauncher;
        assert_eq!(
            launcher.run_shell("true"),
            Ok(String::from("Command finished"))
        );
        assert_eq!(
            launcher.run_shell("exit 3"),
            Err(String::from("Command exited with code 3"))
        );
    }
}
