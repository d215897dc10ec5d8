use crate::adb::shell::{AdbExecutor, ShellOutput};
use crate::core::types::{DeviceId, PathKind};
use crate::error::{ExplorerError, Result};
use crate::library::quote::shell_quote;
use log::*;
use std::path::Path;

/// Issues the adb invocations the browser needs against one device.
///
/// Every call is a single blocking round trip to the external tool; nothing
/// is retried. Paths that pass through `adb shell` are quoted so that
/// embedded spaces and shell metacharacters reach the device intact.
pub struct AdbRunner<E> {
    executor: E,
    device: Option<DeviceId>,
}

impl<E: AdbExecutor> AdbRunner<E> {
    pub fn new(executor: E, device: Option<DeviceId>) -> Self {
        Self { executor, device }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn command_line(args: &[String]) -> String {
        format!("adb {}", args.join(" "))
    }

    async fn invoke(&self, args: Vec<String>) -> Result<(String, ShellOutput)> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(device) = &self.device {
            full.push("-s".to_string());
            full.push(device.to_string());
        }
        full.extend(args);

        let command = Self::command_line(&full);
        debug!("Running: {}", command);
        let output = self.executor.execute(&full).await?;
        Ok((command, output))
    }

    /// Invoke and turn a non-zero exit into a typed error.
    async fn invoke_checked(&self, args: Vec<String>) -> Result<ShellOutput> {
        let (command, output) = self.invoke(args).await?;
        if output.success() {
            return Ok(output);
        }

        let stderr = output.stderr.trim_end().to_string();
        if output.permission_denied() {
            warn!("{}: {}", command, stderr);
            Err(ExplorerError::PermissionDenied { command, stderr })
        } else {
            Err(ExplorerError::CommandFailed {
                command,
                code: output.exit_code,
                stderr,
            })
        }
    }

    fn shell(words: &[&str]) -> Vec<String> {
        std::iter::once("shell")
            .chain(words.iter().copied())
            .map(String::from)
            .collect()
    }

    /// Raw `ls -F` output for `dir`
    pub async fn list(&self, dir: &str, show_hidden: bool) -> Result<String> {
        let quoted = shell_quote(dir);
        let mut words = vec!["ls", quoted.as_str(), "-F"];
        if show_hidden {
            words.push("-A");
        }
        let output = self.invoke_checked(Self::shell(&words)).await?;
        Ok(output.stdout)
    }

    async fn test(&self, flag: &str, path: &str) -> Result<bool> {
        let quoted = shell_quote(path);
        let (_, output) = self
            .invoke(Self::shell(&["[", flag, quoted.as_str(), "]"]))
            .await?;
        Ok(output.success())
    }

    pub async fn probe_file(&self, path: &str) -> Result<bool> {
        self.test("-f", path).await
    }

    pub async fn probe_directory(&self, path: &str) -> Result<bool> {
        self.test("-d", path).await
    }

    /// Classify `path` with the file test first, then the directory test.
    pub async fn probe(&self, path: &str) -> Result<PathKind> {
        if self.probe_file(path).await? {
            Ok(PathKind::File)
        } else if self.probe_directory(path).await? {
            Ok(PathKind::Directory)
        } else {
            Ok(PathKind::Absent)
        }
    }

    pub async fn move_path(&self, src: &str, dst: &str) -> Result<()> {
        let (src, dst) = (shell_quote(src), shell_quote(dst));
        self.invoke_checked(Self::shell(&["mv", src.as_str(), dst.as_str()]))
            .await?;
        Ok(())
    }

    pub async fn copy_path(&self, src: &str, dst: &str) -> Result<()> {
        let (src, dst) = (shell_quote(src), shell_quote(dst));
        self.invoke_checked(Self::shell(&["cp", src.as_str(), dst.as_str()]))
            .await?;
        Ok(())
    }

    /// Recursive, forced delete
    pub async fn remove(&self, path: &str) -> Result<()> {
        let path = shell_quote(path);
        self.invoke_checked(Self::shell(&["rm", "-rf", path.as_str()]))
            .await?;
        Ok(())
    }

    /// Upload a local file or directory into `remote_dir`.
    pub async fn push(&self, local: &Path, remote_dir: &str) -> Result<()> {
        let args = vec![
            "push".to_string(),
            local.display().to_string(),
            remote_dir.to_string(),
        ];
        self.invoke_checked(args).await?;
        Ok(())
    }

    /// Download `remote` to `local` (a file path or an existing directory).
    pub async fn pull(&self, remote: &str, local: &Path) -> Result<()> {
        let args = vec![
            "pull".to_string(),
            remote.to_string(),
            local.display().to_string(),
        ];
        self.invoke_checked(args).await?;
        Ok(())
    }
}
