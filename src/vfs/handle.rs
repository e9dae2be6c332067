//! Open file handles
//!
//! `open` hands back either a real host file/directory or the virtual root.
//! Both page through directory entries with the same cursor.

use log::trace;
use std::fs::{self, File};
use std::io::{self, Read};

use crate::error::{FsError, Op};
use crate::path::{LogicalPath, NativePath, ROOT_MARKER};
use crate::vfs::host;
use crate::vfs::results::{DirBatch, DirEntry, Metadata, SyntheticDirInfo};
use crate::volumes::VolumeSet;

/// Forward-only cursor over a fixed list of entries
#[derive(Debug, Clone)]
pub(crate) struct DirCursor {
    entries: Vec<DirEntry>,
    offset: usize,
}

impl DirCursor {
    pub(crate) fn new(entries: Vec<DirEntry>) -> Self {
        Self { entries, offset: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.entries.len() - self.offset
    }

    /// Next page of at most `count` entries, or everything left when
    /// `count <= 0`.
    ///
    /// Once exhausted, a positive count yields `EndOfDirectory` and a
    /// non-positive count yields an empty page.
    pub(crate) fn next_batch(&mut self, count: isize) -> DirBatch {
        let remaining = self.remaining();
        if remaining == 0 {
            return if count > 0 {
                DirBatch::EndOfDirectory
            } else {
                DirBatch::Entries(Vec::new())
            };
        }

        let n = if count > 0 {
            remaining.min(count as usize)
        } else {
            remaining
        };
        let batch = self.entries[self.offset..self.offset + n].to_vec();
        self.offset += n;
        DirBatch::Entries(batch)
    }
}

/// Handle on the virtual root of a multi-volume host.
///
/// Holds the volume snapshot taken when it was opened; volumes mounted or
/// unmounted afterwards are not seen. Not meant for concurrent readers.
#[derive(Debug, Clone)]
pub struct RootDir {
    volumes: VolumeSet,
    cursor: DirCursor,
}

impl RootDir {
    pub(crate) fn new(volumes: VolumeSet) -> Self {
        Self {
            volumes,
            cursor: DirCursor::new(volumes.entries()),
        }
    }

    /// The snapshot this handle enumerates
    pub fn volumes(&self) -> VolumeSet {
        self.volumes
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.remaining() == 0
    }

    pub fn stat(&self) -> Metadata {
        Metadata::Synthetic(SyntheticDirInfo::new(ROOT_MARKER))
    }

    pub fn read(&mut self, _buf: &mut [u8]) -> Result<usize, FsError> {
        Err(FsError::is_directory(Op::Read, ROOT_MARKER))
    }

    pub fn read_dir(&mut self, count: isize) -> DirBatch {
        let batch = self.cursor.next_batch(count);
        trace!(
            "readdir {} (count {}): {} remaining",
            ROOT_MARKER,
            count,
            self.cursor.remaining()
        );
        batch
    }

    pub fn close(&mut self) {}
}

#[derive(Debug)]
enum HostState {
    File(File),
    /// Listing is taken on the first `read_dir`
    Dir(Option<DirCursor>),
    Closed,
}

/// Handle on a real file or directory
#[derive(Debug)]
pub struct HostFile {
    logical: String,
    name: String,
    native: NativePath,
    state: HostState,
}

impl HostFile {
    pub(crate) fn open(path: &LogicalPath<'_>, native: NativePath) -> Result<Self, FsError> {
        let fail = |e: io::Error| FsError::host(Op::Open, path.as_str(), e);

        let meta = fs::metadata(&native).map_err(fail)?;
        let state = if meta.is_dir() {
            HostState::Dir(None)
        } else {
            HostState::File(File::open(&native).map_err(fail)?)
        };

        Ok(Self {
            logical: path.as_str().to_string(),
            name: path.base_name().to_string(),
            native,
            state,
        })
    }

    /// Logical path this handle was opened with
    pub fn path(&self) -> &str {
        &self.logical
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.state, HostState::Dir(_))
    }

    pub fn stat(&self) -> Result<Metadata, FsError> {
        let fail = |e: io::Error| FsError::host(Op::Stat, &self.logical, e);
        let inner = match &self.state {
            HostState::File(file) => file.metadata().map_err(fail)?,
            HostState::Dir(_) => fs::metadata(&self.native).map_err(fail)?,
            HostState::Closed => return Err(FsError::closed(Op::Stat, &self.logical)),
        };
        Ok(Metadata::Host {
            name: self.name.clone(),
            inner,
        })
    }

    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        match &mut self.state {
            HostState::File(file) => file
                .read(buf)
                .map_err(|e| FsError::host(Op::Read, &self.logical, e)),
            HostState::Dir(_) => Err(FsError::is_directory(Op::Read, &self.logical)),
            HostState::Closed => Err(FsError::closed(Op::Read, &self.logical)),
        }
    }

    pub fn read_dir(&mut self, count: isize) -> Result<DirBatch, FsError> {
        match &mut self.state {
            HostState::Dir(slot) => {
                let cursor = match slot.take() {
                    Some(cursor) => cursor,
                    None => DirCursor::new(host::list_dir(&self.logical, self.native.as_path())?),
                };
                Ok(slot.insert(cursor).next_batch(count))
            }
            HostState::File(_) => Err(FsError::host(
                Op::ReadDir,
                &self.logical,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            )),
            HostState::Closed => Err(FsError::closed(Op::ReadDir, &self.logical)),
        }
    }

    /// Release the host file. Calling it again does nothing.
    pub fn close(&mut self) {
        self.state = HostState::Closed;
    }
}

/// Handle returned by `open`
#[derive(Debug)]
pub enum OpenFile {
    Host(HostFile),
    Root(RootDir),
}

impl OpenFile {
    pub fn stat(&self) -> Result<Metadata, FsError> {
        match self {
            OpenFile::Host(file) => file.stat(),
            OpenFile::Root(root) => Ok(root.stat()),
        }
    }

    /// Read file bytes. Directories fail with is-a-directory.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        match self {
            OpenFile::Host(file) => file.read(buf),
            OpenFile::Root(root) => root.read(buf),
        }
    }

    /// Page through directory entries; see `DirBatch`.
    pub fn read_dir(&mut self, count: isize) -> Result<DirBatch, FsError> {
        match self {
            OpenFile::Host(file) => file.read_dir(count),
            OpenFile::Root(root) => Ok(root.read_dir(count)),
        }
    }

    pub fn close(&mut self) -> Result<(), FsError> {
        match self {
            OpenFile::Host(file) => file.close(),
            OpenFile::Root(root) => root.close(),
        }
        Ok(())
    }

    pub fn is_dir(&self) -> bool {
        match self {
            OpenFile::Host(file) => file.is_dir(),
            OpenFile::Root(_) => true,
        }
    }

    pub fn as_root(&self) -> Option<&RootDir> {
        match self {
            OpenFile::Root(root) => Some(root),
            OpenFile::Host(_) => None,
        }
    }
}

impl Read for OpenFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = match self {
            OpenFile::Host(file) => file.read(buf),
            OpenFile::Root(root) => root.read(buf),
        };
        result.map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(batch: DirBatch) -> Vec<String> {
        batch
            .into_entries()
            .iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    #[test]
    fn test_empty_snapshot_starts_exhausted() {
        let mut root = RootDir::new(VolumeSet::from_mask(0));
        assert!(root.is_exhausted());
        assert!(root.read_dir(1).is_end());
        assert!(names(root.read_dir(-1)).is_empty());
        assert!(!root.read_dir(0).is_end());
    }

    #[test]
    fn test_read_all_then_nothing() {
        let mut root = RootDir::new(VolumeSet::from_mask(1 << 2));
        assert_eq!(names(root.read_dir(-1)), ["C:"]);
        assert!(root.is_exhausted());

        let again = root.read_dir(-1);
        assert!(!again.is_end());
        assert!(names(again).is_empty());
    }

    #[test]
    fn test_positive_pages_then_end() {
        let mut root = RootDir::new(VolumeSet::from_mask(0b1_1101));
        assert_eq!(names(root.read_dir(2)), ["A:", "C:"]);
        assert_eq!(names(root.read_dir(2)), ["D:", "E:"]);
        assert!(root.read_dir(2).is_end());
        assert!(root.read_dir(1).is_end());
    }

    #[test]
    fn test_mixed_counts_enumerate_once_in_order() {
        let set = VolumeSet::from_mask(0b11_1111);
        let expected: Vec<String> = set.entries().iter().map(|e| e.name().to_string()).collect();

        for counts in [
            vec![1, 1, 1, 1, 1, 1, 1],
            vec![4, 0],
            vec![5, 5, -1],
            vec![0, 3],
            vec![2, -3, 1],
        ] {
            let mut root = RootDir::new(set);
            let mut seen = Vec::new();
            for count in counts {
                seen.extend(names(root.read_dir(count)));
            }
            assert_eq!(seen, expected);
            assert!(root.is_exhausted());
        }
    }

    #[test]
    fn test_root_stat_and_read() {
        let mut root = RootDir::new(VolumeSet::from_mask(1 << 2));
        let meta = root.stat();
        assert_eq!(meta.name(), ".");
        assert!(meta.is_dir());

        let err = root.read(&mut [0u8; 8]).unwrap_err();
        assert!(err.is_dir_error());
        assert_eq!(err.path(), ".");

        root.close();
        root.close();
        assert_eq!(names(root.read_dir(-1)), ["C:"]);
    }

    #[test]
    fn test_cursor_slices() {
        let set = VolumeSet::from_mask(0b111);
        let mut cursor = DirCursor::new(set.entries());
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(names(cursor.next_batch(10)), ["A:", "B:", "C:"]);
        assert_eq!(cursor.remaining(), 0);
    }
}
