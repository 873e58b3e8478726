//! Plain data shared by the collector and presenters.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::FileType;

use crate::error::MetadataQueryFailed;

/// One immediate child discovered by listing a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw entry name as returned by the platform.
    pub name: OsString,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name for display, replacing invalid UTF-8 sequences.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Filesystem object type reported by a non-following metadata query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
    Symlink,
}

impl EntryKind {
    /// Returns the lowercase label used by machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Other => "other",
            EntryKind::Symlink => "symlink",
        }
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Result of a successful metadata query for one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryMetadata {
    kind: EntryKind,
}

impl EntryMetadata {
    pub fn new(kind: EntryKind) -> Self {
        Self { kind }
    }

    pub fn kind(self) -> EntryKind {
        self.kind
    }

    /// Returns whether the entry is a regular file.
    ///
    /// Symbolic links and special files are not files, even when a link
    /// points at one.
    pub fn is_file(self) -> bool {
        self.kind == EntryKind::File
    }
}

/// One listed entry paired with the outcome of its metadata query.
#[derive(Debug, PartialEq, Eq)]
pub struct EntryResult {
    pub entry: DirectoryEntry,
    pub outcome: Result<EntryMetadata, MetadataQueryFailed>,
}

impl EntryResult {
    pub fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }
}
