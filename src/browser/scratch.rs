use crate::error::Result;
use log::*;
use std::path::Path;
use tempfile::TempDir;

/// Local temporary directories holding files pulled for viewing.
///
/// Each open gets a fresh directory. They stay on disk while the session
/// lives, since an external viewer may still be reading them, and are
/// removed by [`ScratchSpace::reclaim`] or on drop.
#[derive(Debug, Default)]
pub struct ScratchSpace {
    dirs: Vec<TempDir>,
}

impl ScratchSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Result<&Path> {
        let dir = tempfile::Builder::new().prefix("adbx-").tempdir()?;
        debug!("Allocated scratch directory {}", dir.path().display());
        self.dirs.push(dir);
        Ok(self.dirs[self.dirs.len() - 1].path())
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Delete every scratch directory. Failures (a viewer holding a file
    /// open on Windows, say) are logged and skipped.
    pub fn reclaim(&mut self) {
        for dir in self.dirs.drain(..) {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                warn!("Could not remove {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for ScratchSpace {
    fn drop(&mut self) {
        self.reclaim();
    }
}
