//! Hand a resolved URL to the operator's browser.

use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Capability to open a URL in a browser.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Opens URLs with the platform opener, or with a configured program.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    program: Option<String>,
    args: Vec<String>,
}

impl SystemBrowser {
    /// `args` go before the URL and only apply to a configured `program`.
    pub fn new(program: Option<String>, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// Program and leading arguments; the URL is appended as the last argument.
    pub fn launcher(&self) -> (String, Vec<String>) {
        match &self.program {
            Some(program) => (program.clone(), self.args.clone()),
            None => platform_launcher(),
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_launcher() -> (String, Vec<String>) {
    ("open".to_string(), Vec::new())
}

// Not `cmd /C start`: cmd splits unquoted URLs at `&`.
#[cfg(target_os = "windows")]
fn platform_launcher() -> (String, Vec<String>) {
    ("explorer".to_string(), Vec::new())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_launcher() -> (String, Vec<String>) {
    ("xdg-open".to_string(), Vec::new())
}

#[cfg(target_os = "windows")]
fn tolerates_exit_code(program: &str) -> bool {
    program.eq_ignore_ascii_case("explorer")
}

#[cfg(not(target_os = "windows"))]
fn tolerates_exit_code(_program: &str) -> bool {
    false
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        let (program, args) = self.launcher();
        tracing::info!(%program, "opening browser");
        tracing::debug!(url, "browser target");
        let status = Command::new(&program)
            .args(&args)
            .arg(url)
            .status()
            .map_err(|source| BrowserError::Spawn {
                program: program.clone(),
                source,
            })?;
        // explorer reports 1 even when it hands the URL off.
        if !status.success() && !tolerates_exit_code(&program) {
            return Err(BrowserError::Failed { program, status });
        }
        Ok(())
    }
}
