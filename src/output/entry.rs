use crate::core::types::{DirectoryEntry, PathKind};
use crate::output::{PlainFormat, TableFormat};
use serde::Serialize;

impl TableFormat for DirectoryEntry {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "TYPE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.display_name(), self.kind.to_string()]
    }
}

impl PlainFormat for DirectoryEntry {
    fn plain(&self) -> String {
        self.display_name()
    }
}

/// What a single path on the device is, for `stat`
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub path: String,
    pub kind: String,
}

impl PathReport {
    pub fn new(path: impl Into<String>, kind: PathKind) -> Self {
        Self {
            path: path.into(),
            kind: kind.to_string(),
        }
    }
}

impl TableFormat for PathReport {
    fn headers() -> Vec<&'static str> {
        vec!["PATH", "KIND"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.path.clone(), self.kind.clone()]
    }
}

impl PlainFormat for PathReport {
    fn plain(&self) -> String {
        format!("{}\t{}", self.path, self.kind)
    }
}
