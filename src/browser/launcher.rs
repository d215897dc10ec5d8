use crate::error::{ExplorerError, Result};
use log::*;
use std::path::Path;
use std::process::Command;

/// Platform command that opens a file with its default application
pub fn opener_command(path: &Path) -> Command {
    let mut cmd;
    if cfg!(target_os = "windows") {
        cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
    } else if cfg!(target_os = "macos") {
        cmd = Command::new("open");
        cmd.arg(path);
    } else {
        cmd = Command::new("xdg-open");
        cmd.arg(path);
    }
    cmd
}

/// Hand `path` to the desktop's default application without waiting for it.
pub fn open_local(path: &Path) -> Result<()> {
    let mut cmd = opener_command(path);
    let program = cmd.get_program().to_string_lossy().into_owned();
    info!("Opening {} with {}", path.display(), program);

    cmd.spawn()
        .map_err(|source| ExplorerError::LaunchFailure { program, source })?;
    Ok(())
}
