//! Host operations
//!
//! Thin wrappers over `std::fs` that attach the caller's logical path to
//! every failure.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::handlers::report;
use crate::error::{FsError, Op};
use crate::path::validation::join_child;
use crate::path::{LogicalPath, NativePath};
use crate::vfs::handle::{HostFile, OpenFile};
use crate::vfs::results::{DirEntry, HostEntry, Metadata};

/// Open a real file or directory
pub(crate) fn open(path: &LogicalPath<'_>, native: NativePath) -> Result<OpenFile, FsError> {
    HostFile::open(path, native)
        .map(OpenFile::Host)
        .map_err(report)
}

/// Metadata of a real object, following symlinks
pub(crate) fn stat(path: &LogicalPath<'_>, native: &NativePath) -> Result<Metadata, FsError> {
    let inner = fs::metadata(native)
        .map_err(|e| report(FsError::host(Op::Stat, path.as_str(), e)))?;
    Ok(Metadata::Host {
        name: path.base_name().to_string(),
        inner,
    })
}

/// Whole contents of a real file
pub(crate) fn read_file(path: &LogicalPath<'_>, native: &NativePath) -> Result<Vec<u8>, FsError> {
    let data = fs::read(native)
        .map_err(|e| report(FsError::host(Op::ReadFile, path.as_str(), e)))?;
    debug!("Read {} ({}) - {} bytes", path.as_str(), native, data.len());
    Ok(data)
}

/// Listing of a real directory, sorted by name
pub(crate) fn read_dir(path: &LogicalPath<'_>, native: &NativePath) -> Result<Vec<DirEntry>, FsError> {
    list_dir(path.as_str(), native.as_path()).map_err(report)
}

pub(crate) fn list_dir(logical: &str, native: &Path) -> Result<Vec<DirEntry>, FsError> {
    let fail = |e: io::Error| FsError::host(Op::ReadDir, logical, e);

    let mut entries = Vec::new();
    for entry in fs::read_dir(native).map_err(fail)? {
        let entry = entry.map_err(fail)?;
        let file_type = entry.file_type().map_err(fail)?;
        let name = entry.file_name().to_string_lossy().to_string();
        let child = join_child(logical, &name);
        entries.push(DirEntry::Host(HostEntry::new(name, child, file_type, entry.path())));
    }
    entries.sort_by(|a, b| a.name().cmp(b.name()));

    debug!(
        "Listed directory {} ({}) - {} entries",
        logical,
        native.display(),
        entries.len()
    );
    Ok(entries)
}
