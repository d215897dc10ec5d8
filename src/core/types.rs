use crate::library::remote_path;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref NETWORK_ADDRESS: Regex = Regex::new(r"^[0-9.:]*$").unwrap();
}

/// Strongly typed device identifier (USB serial or `host:port`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id looks like an IP address and port rather than a USB
    /// serial. Only used for display.
    pub fn is_network_address(&self) -> bool {
        NETWORK_ADDRESS.is_match(&self.0)
    }

    pub fn connection_label(&self) -> &'static str {
        if self.is_network_address() {
            "network"
        } else {
            "usb"
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A directory on the device in display form.
///
/// Always absolute and normalized; every directory except the root carries
/// a single trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RemoteDir(String);

impl RemoteDir {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build from any path text, normalizing it into directory form.
    pub fn new(path: &str) -> Self {
        Self(remote_path::as_directory(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Absolute path of `name` inside this directory.
    pub fn join(&self, name: &str) -> String {
        remote_path::join(&self.0, name)
    }

    pub fn parent(&self) -> Self {
        Self(remote_path::parent(&self.0))
    }

    /// Last component, or `None` at the root.
    pub fn name(&self) -> Option<String> {
        remote_path::file_name(&self.0)
    }
}

impl Default for RemoteDir {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RemoteDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry type as reported by the `ls -F` type marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Unmarked: regular files and any other type `-F` leaves bare.
    File,
    /// `*`
    Executable,
    /// `/`
    Directory,
    /// `@`
    Symlink,
}

impl EntryKind {
    pub fn marker(&self) -> Option<char> {
        match self {
            EntryKind::File => None,
            EntryKind::Executable => Some('*'),
            EntryKind::Directory => Some('/'),
            EntryKind::Symlink => Some('@'),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::File => "file",
            EntryKind::Executable => "executable",
            EntryKind::Directory => "directory",
            EntryKind::Symlink => "symlink",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Name with its type marker put back, as `ls -F` printed it.
    pub fn display_name(&self) -> String {
        match self.kind.marker() {
            Some(marker) => format!("{}{}", self.name, marker),
            None => self.name.clone(),
        }
    }
}

/// Naturally ordered listing of one directory
pub type EntryList = Vec<DirectoryEntry>;

/// What a path on the device turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    /// Missing, or not reachable with the current permissions.
    Absent,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => write!(f, "file"),
            PathKind::Directory => write!(f, "directory"),
            PathKind::Absent => write!(f, "absent"),
        }
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    EnteredDirectory(RemoteDir),
    /// The target is a file; the caller decides how to open it.
    ResolvedFile(String),
    NotFound(String),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}
