//! Navigation over the device's filesystem.
//!
//! These functions hold no state: they take the current directory and
//! return what it should become. The [`Explorer`](super::Explorer) session
//! decides when to commit the result.

use crate::adb::{AdbExecutor, AdbRunner};
use crate::browser::classify::parse_listing;
use crate::core::types::{EntryList, Navigation, PathKind, RemoteDir};
use crate::error::Result;
use crate::library::remote_path;
use log::*;

/// List `dir`. Fails with `PermissionDenied` when the device refuses, and
/// with a generic failure for anything else.
pub async fn list_current<E: AdbExecutor>(
    runner: &AdbRunner<E>,
    dir: &RemoteDir,
    show_hidden: bool,
) -> Result<EntryList> {
    let stdout = runner.list(dir.as_str(), show_hidden).await?;
    let entries = parse_listing(&stdout);
    debug!("{} entries in {}", entries.len(), dir);
    Ok(entries)
}

/// Parent directory. The root is its own parent.
pub fn go_up(dir: &RemoteDir) -> RemoteDir {
    dir.parent()
}

/// Resolve `entry_name` relative to `dir` and find out what it is.
pub async fn enter<E: AdbExecutor>(
    runner: &AdbRunner<E>,
    dir: &RemoteDir,
    entry_name: &str,
) -> Result<Navigation> {
    resolve(runner, dir.join(entry_name)).await
}

/// Resolve an absolute path typed by the user.
pub async fn go_absolute<E: AdbExecutor>(
    runner: &AdbRunner<E>,
    raw_path: &str,
) -> Result<Navigation> {
    resolve(runner, remote_path::normalize(raw_path.trim())).await
}

async fn resolve<E: AdbExecutor>(runner: &AdbRunner<E>, target: String) -> Result<Navigation> {
    let navigation = match runner.probe(&target).await? {
        PathKind::Directory => Navigation::EnteredDirectory(RemoteDir::new(&target)),
        PathKind::File => Navigation::ResolvedFile(target),
        PathKind::Absent => {
            info!("{} is not a file or directory, or is not accessible", target);
            Navigation::NotFound(target)
        }
    };
    Ok(navigation)
}
