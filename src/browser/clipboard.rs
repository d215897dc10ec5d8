use crate::adb::{AdbExecutor, AdbRunner};
use crate::core::types::RemoteDir;
use crate::error::{ExplorerError, Result};
use log::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    Copy,
    Cut,
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipMode::Copy => write!(f, "copy"),
            ClipMode::Cut => write!(f, "cut"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub source: String,
    pub mode: ClipMode,
}

/// Holds at most one pending copy or cut.
#[derive(Debug, Default)]
pub struct Clipboard {
    slot: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was armed before.
    pub fn arm(&mut self, source: impl Into<String>, mode: ClipMode) {
        let entry = ClipboardEntry {
            source: source.into(),
            mode,
        };
        debug!("Clipboard armed: {} {}", entry.mode, entry.source);
        self.slot = Some(entry);
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.slot.as_ref()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Apply the armed entry to `target`.
    ///
    /// A cut is consumed whether or not the move succeeds; a copy stays
    /// armed so it can be pasted again.
    pub async fn paste<E: AdbExecutor>(
        &mut self,
        runner: &AdbRunner<E>,
        target: &RemoteDir,
    ) -> Result<()> {
        let entry = self.slot.clone().ok_or(ExplorerError::ClipboardEmpty)?;

        match entry.mode {
            ClipMode::Cut => {
                self.slot = None;
                runner.move_path(&entry.source, target.as_str()).await
            }
            ClipMode::Copy => runner.copy_path(&entry.source, target.as_str()).await,
        }
    }
}
