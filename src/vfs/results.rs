//! Filesystem result types
//!
//! Metadata and directory entries come in two flavors: real values backed by
//! the host, and synthetic directories fabricated for the virtual root and
//! for bare volumes.

use bitflags::bitflags;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::{FsError, Op};

bitflags! {
    /// File type and permission bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileMode: u32 {
        const DIR = 1 << 31;
        const SYMLINK = 1 << 27;
        const PERM = 0o777;
    }
}

impl FileMode {
    pub fn is_dir(&self) -> bool {
        self.contains(FileMode::DIR)
    }

    /// Permission bits only
    pub fn perm(&self) -> u32 {
        self.bits() & FileMode::PERM.bits()
    }

    /// Type bits only
    pub fn file_type(&self) -> FileMode {
        *self & (FileMode::DIR | FileMode::SYMLINK)
    }

    fn from_file_type(file_type: fs::FileType) -> Self {
        let mut mode = FileMode::empty();
        if file_type.is_dir() {
            mode |= FileMode::DIR;
        }
        if file_type.is_symlink() {
            mode |= FileMode::SYMLINK;
        }
        mode
    }

    fn from_metadata(meta: &fs::Metadata) -> Self {
        FileMode::from_bits_retain(permission_bits(meta)) | Self::from_file_type(meta.file_type())
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & FileMode::PERM.bits()
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    let base = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    if meta.is_dir() { base | 0o111 } else { base }
}

/// Metadata of a directory that has no host object behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticDirInfo {
    name: String,
}

impl SyntheticDirInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Directory entry that has no host object behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticEntry {
    name: String,
}

impl SyntheticEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> SyntheticDirInfo {
        SyntheticDirInfo::new(self.name.clone())
    }
}

/// Metadata returned by `stat`
#[derive(Debug, Clone)]
pub enum Metadata {
    Host { name: String, inner: fs::Metadata },
    Synthetic(SyntheticDirInfo),
}

impl Metadata {
    pub fn name(&self) -> &str {
        match self {
            Metadata::Host { name, .. } => name,
            Metadata::Synthetic(info) => info.name(),
        }
    }

    pub fn len(&self) -> u64 {
        match self {
            Metadata::Host { inner, .. } => inner.len(),
            Metadata::Synthetic(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_dir(&self) -> bool {
        match self {
            Metadata::Host { inner, .. } => inner.is_dir(),
            Metadata::Synthetic(_) => true,
        }
    }

    pub fn mode(&self) -> FileMode {
        match self {
            Metadata::Host { inner, .. } => FileMode::from_metadata(inner),
            Metadata::Synthetic(_) => FileMode::DIR,
        }
    }

    /// Modification time. Synthetic directories report `UNIX_EPOCH`; host
    /// failures (e.g. no mtime on this platform) are returned as errors.
    pub fn modified(&self) -> io::Result<SystemTime> {
        match self {
            Metadata::Host { inner, .. } => inner.modified(),
            Metadata::Synthetic(_) => Ok(SystemTime::UNIX_EPOCH),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Metadata::Synthetic(_))
    }

    /// The underlying host metadata, if any
    pub fn host(&self) -> Option<&fs::Metadata> {
        match self {
            Metadata::Host { inner, .. } => Some(inner),
            Metadata::Synthetic(_) => None,
        }
    }
}

/// A directory entry backed by the host
#[derive(Debug, Clone)]
pub struct HostEntry {
    name: String,
    logical: String,
    file_type: fs::FileType,
    native: PathBuf,
}

impl HostEntry {
    pub(crate) fn new(
        name: String,
        logical: String,
        file_type: fs::FileType,
        native: PathBuf,
    ) -> Self {
        Self {
            name,
            logical,
            file_type,
            native,
        }
    }
}

/// Entry returned by directory listings
#[derive(Debug, Clone)]
pub enum DirEntry {
    Host(HostEntry),
    Synthetic(SyntheticEntry),
}

impl DirEntry {
    pub fn name(&self) -> &str {
        match self {
            DirEntry::Host(entry) => &entry.name,
            DirEntry::Synthetic(entry) => entry.name(),
        }
    }

    pub fn is_dir(&self) -> bool {
        match self {
            DirEntry::Host(entry) => entry.file_type.is_dir(),
            DirEntry::Synthetic(_) => true,
        }
    }

    /// Type bits of the entry's mode
    pub fn file_type_mode(&self) -> FileMode {
        match self {
            DirEntry::Host(entry) => FileMode::from_file_type(entry.file_type),
            DirEntry::Synthetic(_) => FileMode::DIR,
        }
    }

    /// Metadata for the entry. Host entries are not followed through symlinks.
    pub fn info(&self) -> Result<Metadata, FsError> {
        match self {
            DirEntry::Host(entry) => fs::symlink_metadata(&entry.native)
                .map(|inner| Metadata::Host {
                    name: entry.name.clone(),
                    inner,
                })
                .map_err(|e| FsError::host(Op::Stat, &entry.logical, e)),
            DirEntry::Synthetic(entry) => Ok(Metadata::Synthetic(entry.info())),
        }
    }
}

/// One page of a paginated directory read
#[derive(Debug, Clone)]
pub enum DirBatch {
    Entries(Vec<DirEntry>),
    /// Nothing left and a positive count was requested
    EndOfDirectory,
}

impl DirBatch {
    pub fn is_end(&self) -> bool {
        matches!(self, DirBatch::EndOfDirectory)
    }

    /// Entries of the batch. Empty at end of directory.
    pub fn into_entries(self) -> Vec<DirEntry> {
        match self {
            DirBatch::Entries(entries) => entries,
            DirBatch::EndOfDirectory => Vec::new(),
        }
    }
}
