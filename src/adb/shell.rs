use crate::error::{ExplorerError, Result};
use async_trait::async_trait;
use log::*;
use tokio::process::Command;

/// Tail of the error stream that marks an access failure on the device.
/// Matching on localized text is fragile; adb exposes nothing structured
/// for it.
pub const PERMISSION_DENIED: &str = "Permission denied";

/// Captured result of one adb invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn permission_denied(&self) -> bool {
        self.stderr.trim_end().ends_with(PERMISSION_DENIED)
    }
}

/// Something that can run `adb` with an argument list.
///
/// The argument list excludes the program itself.
#[async_trait]
pub trait AdbExecutor: Send + Sync {
    async fn execute(&self, args: &[String]) -> Result<ShellOutput>;
}

/// Runs the adb binary as a child process and waits for it to exit
#[derive(Debug, Clone)]
pub struct AdbProcess {
    program: String,
}

impl AdbProcess {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for AdbProcess {
    fn default() -> Self {
        Self::new("adb")
    }
}

#[async_trait]
impl AdbExecutor for AdbProcess {
    async fn execute(&self, args: &[String]) -> Result<ShellOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| ExplorerError::LaunchFailure {
                program: self.program.clone(),
                source,
            })?;

        let result = ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            // Killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
        };
        trace!("adb exited with {}: {:?}", result.exit_code, result.stderr);
        Ok(result)
    }
}
