use crate::adb::{AdbExecutor, AdbRunner};
use crate::browser::clipboard::{ClipMode, Clipboard};
use crate::browser::scratch::ScratchSpace;
use crate::browser::{launcher, navigator};
use crate::core::types::{EntryList, Navigation, PathKind, RemoteDir};
use crate::error::{ExplorerError, Result};
use crate::library::remote_path;
use crate::progress::ProgressFactory;
use log::*;
use std::path::{Path, PathBuf};

/// How a refresh ended
#[derive(Debug)]
pub enum RefreshOutcome {
    Listed,
    /// `from` could not be listed; the session moved up until a listing
    /// succeeded.
    FellBack { from: RemoteDir, cause: ExplorerError },
}

/// Browsing state for one device: the directory on screen, its entries,
/// the clipboard and the hidden-files switch.
///
/// Operations take `&mut self` and complete before returning, so the
/// current directory never changes while a listing or mutation is in
/// flight.
pub struct Explorer<E> {
    runner: AdbRunner<E>,
    current: RemoteDir,
    entries: EntryList,
    clipboard: Clipboard,
    show_hidden: bool,
    scratch: ScratchSpace,
    progress: ProgressFactory,
}

impl<E: AdbExecutor> Explorer<E> {
    /// Start at `/` with nothing listed yet; call [`Explorer::refresh`].
    pub fn new(runner: AdbRunner<E>, show_hidden: bool) -> Self {
        Self {
            runner,
            current: RemoteDir::root(),
            entries: EntryList::new(),
            clipboard: Clipboard::new(),
            show_hidden,
            scratch: ScratchSpace::new(),
            progress: ProgressFactory::disabled(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressFactory) -> Self {
        self.progress = progress;
        self
    }

    pub fn runner(&self) -> &AdbRunner<E> {
        &self.runner
    }

    pub fn current_dir(&self) -> &RemoteDir {
        &self.current
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn can_paste(&self) -> bool {
        self.clipboard.is_armed()
    }

    /// Number of scratch directories holding opened files
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Re-list the current directory, walking up on failure.
    ///
    /// Errors only when `adb` cannot be started or the root itself cannot
    /// be listed.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome> {
        let mut first_failure: Option<(RemoteDir, ExplorerError)> = None;

        loop {
            match navigator::list_current(&self.runner, &self.current, self.show_hidden).await {
                Ok(entries) => {
                    self.entries = entries;
                    return Ok(match first_failure {
                        None => RefreshOutcome::Listed,
                        Some((from, cause)) => RefreshOutcome::FellBack { from, cause },
                    });
                }
                Err(e @ ExplorerError::LaunchFailure { .. }) => return Err(e),
                Err(e) if self.current.is_root() => return Err(e),
                Err(e) => {
                    let parent = navigator::go_up(&self.current);
                    warn!("Could not list {}: {}; trying {}", self.current, e, parent);
                    if first_failure.is_none() {
                        first_failure = Some((self.current.clone(), e));
                    }
                    self.current = parent;
                }
            }
        }
    }

    /// Refresh after a change, surfacing a fallback as the error that
    /// caused it.
    async fn reload(&mut self) -> Result<()> {
        match self.refresh().await? {
            RefreshOutcome::Listed => Ok(()),
            RefreshOutcome::FellBack { cause, .. } => Err(cause),
        }
    }

    pub async fn set_show_hidden(&mut self, show_hidden: bool) -> Result<RefreshOutcome> {
        self.show_hidden = show_hidden;
        self.refresh().await
    }

    pub async fn up(&mut self) -> Result<RefreshOutcome> {
        self.current = navigator::go_up(&self.current);
        self.refresh().await
    }

    /// Step into `name`. Directories become current; files and missing
    /// targets leave the current directory as it was.
    pub async fn enter(&mut self, name: &str) -> Result<Navigation> {
        let navigation = navigator::enter(&self.runner, &self.current, name).await?;
        self.apply(&navigation).await?;
        Ok(navigation)
    }

    /// Jump to an absolute path. On `NotFound` nothing changes, so a caller
    /// showing an editable path should put back [`Explorer::current_dir`].
    pub async fn go_absolute(&mut self, raw_path: &str) -> Result<Navigation> {
        let navigation = navigator::go_absolute(&self.runner, raw_path).await?;
        self.apply(&navigation).await?;
        Ok(navigation)
    }

    async fn apply(&mut self, navigation: &Navigation) -> Result<()> {
        if let Navigation::EnteredDirectory(dir) = navigation {
            self.current = dir.clone();
            self.reload().await?;
        }
        Ok(())
    }

    /// Pull a remote file into a fresh scratch directory and return the
    /// local copy.
    pub async fn fetch_for_viewing(&mut self, remote_path: &str) -> Result<PathBuf> {
        let name = remote_path::file_name(remote_path).ok_or_else(|| {
            ExplorerError::InvalidArgument(format!("{} is not a file", remote_path))
        })?;
        let dir = self.scratch.allocate()?.to_path_buf();

        self.pull_with_progress(remote_path, &dir).await?;
        Ok(dir.join(name))
    }

    /// Download `remote_path` and open it with the desktop's default
    /// application.
    pub async fn open(&mut self, remote_path: &str) -> Result<PathBuf> {
        let local = self.fetch_for_viewing(remote_path).await?;
        launcher::open_local(&local)?;
        Ok(local)
    }

    pub async fn open_entry(&mut self, name: &str) -> Result<PathBuf> {
        let path = self.existing_entry(name).await?;
        self.open(&path).await
    }

    /// Pull entry `name` of the current directory to `local`.
    pub async fn download(&self, name: &str, local: &Path) -> Result<()> {
        let remote = self.existing_entry(name).await?;
        self.pull_with_progress(&remote, local).await
    }

    async fn existing_entry(&self, name: &str) -> Result<String> {
        let path = self.entry_path(name)?;
        match self.runner.probe(&path).await? {
            PathKind::Absent => Err(ExplorerError::NotFound(path)),
            _ => Ok(path),
        }
    }

    /// Pull the whole current directory to `local`.
    pub async fn download_current(&self, local: &Path) -> Result<()> {
        let remote = self.current.as_str().to_string();
        self.pull_with_progress(&remote, local).await
    }

    /// Push a local file or directory into the current directory.
    pub async fn upload(&mut self, local: &Path) -> Result<()> {
        if !local.exists() {
            return Err(ExplorerError::NotFound(local.display().to_string()));
        }
        if local.is_dir() {
            let files = walkdir::WalkDir::new(local)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .count();
            info!("Uploading {} files from {}", files, local.display());
        }

        let progress = self
            .progress
            .transfer(&format!("Uploading {}", local.display()));
        let result = self.runner.push(local, self.current.as_str()).await;
        match &result {
            Ok(()) => progress.finish(),
            Err(_) => progress.abandon(),
        }
        result?;

        self.reload().await
    }

    async fn pull_with_progress(&self, remote: &str, local: &Path) -> Result<()> {
        let progress = self.progress.transfer(&format!("Downloading {}", remote));
        let result = self.runner.pull(remote, local).await;
        match &result {
            Ok(()) => progress.finish(),
            Err(_) => progress.abandon(),
        }
        result
    }

    pub fn copy(&mut self, name: &str) -> Result<()> {
        let source = self.entry_path(name)?;
        self.clipboard.arm(source, ClipMode::Copy);
        Ok(())
    }

    pub fn cut(&mut self, name: &str) -> Result<()> {
        let source = self.entry_path(name)?;
        self.clipboard.arm(source, ClipMode::Cut);
        Ok(())
    }

    /// Paste the clipboard into the current directory.
    pub async fn paste(&mut self) -> Result<()> {
        self.clipboard.paste(&self.runner, &self.current).await?;
        self.reload().await
    }

    /// Rename an entry of the current directory, refusing to overwrite.
    pub async fn rename(&mut self, name: &str, new_name: &str) -> Result<()> {
        rename_entry(&self.runner, &self.current, name, new_name).await?;
        self.reload().await
    }

    /// Recursively delete an entry of the current directory.
    pub async fn delete(&mut self, name: &str) -> Result<()> {
        let target = self.entry_path(name)?;
        self.runner.remove(&target).await?;
        self.reload().await
    }

    fn entry_path(&self, name: &str) -> Result<String> {
        entry_path(&self.current, name)
    }

    /// Remove scratch files and hand back the hidden-files switch for
    /// persisting.
    pub fn shutdown(mut self) -> bool {
        self.scratch.reclaim();
        self.show_hidden
    }
}

/// Absolute path of entry `name` of `dir`. Names that are blank or that
/// resolve to `dir` itself or above it are rejected.
pub fn entry_path(dir: &RemoteDir, name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(ExplorerError::InvalidArgument(
            "Entry name cannot be empty".to_string(),
        ));
    }
    let path = dir.join(name);
    if !path.starts_with(dir.as_str()) || path.len() <= dir.as_str().len() {
        return Err(ExplorerError::InvalidArgument(format!(
            "'{}' is not an entry of {}",
            name, dir
        )));
    }
    Ok(path)
}

/// Rename `name` inside `dir` to `new_name`, failing with `AlreadyExists`
/// unless the new path is absent. Returns the new path.
pub async fn rename_entry<E: AdbExecutor>(
    runner: &AdbRunner<E>,
    dir: &RemoteDir,
    name: &str,
    new_name: &str,
) -> Result<String> {
    let original = entry_path(dir, name)?;
    let renamed = entry_path(dir, new_name)?;

    if runner.probe(&renamed).await? != PathKind::Absent {
        return Err(ExplorerError::AlreadyExists(renamed));
    }
    runner.move_path(&original, &renamed).await?;
    info!("Renamed {} to {}", original, renamed);
    Ok(renamed)
}
