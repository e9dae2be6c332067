//! Single-root host filesystem
//!
//! Every logical path hangs off one host directory, `/` by default.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::OsFsConfig;
use crate::error::handlers::report;
use crate::error::{FsError, Op};
use crate::path::{LogicalPath, NativePath, translators};
use crate::vfs::handle::OpenFile;
use crate::vfs::host;
use crate::vfs::results::{DirEntry, Metadata};
use crate::vfs::traits::FileSystem;

/// Default host root
pub const DEFAULT_ROOT: &str = "/";

/// Filesystem over a host with a single root
#[derive(Debug, Clone)]
pub struct SingleRootFs {
    root: PathBuf,
}

impl Default for SingleRootFs {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleRootFs {
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }

    /// Serve the tree under `root`. `.` maps to `root` itself.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &OsFsConfig) -> Self {
        Self::with_root(config.root_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate `name` and map it under the root
    fn resolve<'a>(&self, op: Op, name: &'a str) -> Result<(LogicalPath<'a>, NativePath), FsError> {
        let path = LogicalPath::parse(name).ok_or_else(|| report(FsError::invalid(op, name)))?;
        let native = translators::single_root(&self.root, &path);
        debug!("{} {} -> {}", op, name, native);
        Ok((path, native))
    }
}

impl FileSystem for SingleRootFs {
    fn open(&self, name: &str) -> Result<OpenFile, FsError> {
        let (path, native) = self.resolve(Op::Open, name)?;
        host::open(&path, native)
    }

    fn stat(&self, name: &str) -> Result<Metadata, FsError> {
        let (path, native) = self.resolve(Op::Stat, name)?;
        host::stat(&path, &native)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>, FsError> {
        let (path, native) = self.resolve(Op::ReadFile, name)?;
        host::read_file(&path, &native)
    }

    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>, FsError> {
        let (path, native) = self.resolve(Op::ReadDir, name)?;
        host::read_dir(&path, &native)
    }
}
