//! Filesystem capability
//!
//! The read-only contract both host variants satisfy.

use crate::error::FsError;
use crate::vfs::handle::OpenFile;
use crate::vfs::results::{DirEntry, Metadata};

/// Read-only filesystem addressed by logical paths.
///
/// Paths are slash-separated and relative, with `.` naming the root.
/// Malformed paths fail with an invalid-path error before the host is
/// touched.
pub trait FileSystem: Send + Sync {
    /// Open a file or directory for reading.
    fn open(&self, name: &str) -> Result<OpenFile, FsError>;

    /// Metadata for `name`.
    fn stat(&self, name: &str) -> Result<Metadata, FsError>;

    /// Entire contents of the file at `name`.
    fn read_file(&self, name: &str) -> Result<Vec<u8>, FsError>;

    /// All entries of the directory at `name`, in order.
    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>, FsError>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn open(&self, name: &str) -> Result<OpenFile, FsError> {
        (**self).open(name)
    }

    fn stat(&self, name: &str) -> Result<Metadata, FsError> {
        (**self).stat(name)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>, FsError> {
        (**self).read_file(name)
    }

    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>, FsError> {
        (**self).read_dir(name)
    }
}
