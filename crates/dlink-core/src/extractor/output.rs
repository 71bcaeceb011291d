//! Captured text of a finished extraction call.

use std::process::Output;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// None when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// The whole of stdout with surrounding whitespace removed. No other
    /// transformation and no check that it looks like a URL.
    pub fn direct_url(&self) -> &str {
        self.stdout.trim()
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for CapturedOutput {
    fn from(out: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            exit_code: out.status.code(),
        }
    }
}
