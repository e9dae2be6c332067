//! Multi-root host filesystem
//!
//! Hosts with lettered volumes have no single root, so `.` is a virtual
//! directory whose children are the mounted volumes (`C:`, `D:`, ...).
//! Logical paths below it must start with a volume prefix, e.g.
//! `C:/Windows/system.ini`.

use log::{debug, trace, warn};

use crate::error::handlers::report;
use crate::error::{FsError, Op};
use crate::path::{LogicalPath, NativePath, ROOT_MARKER, translators};
use crate::vfs::handle::{OpenFile, RootDir};
use crate::vfs::host;
use crate::vfs::results::{DirEntry, Metadata, SyntheticDirInfo};
use crate::vfs::traits::FileSystem;
use crate::volumes::{VolumeProbe, VolumeSet};

/// What a logical path resolves to on a multi-root host
enum Target<'a> {
    /// The virtual root
    Root,
    /// A mounted volume with nothing after the prefix
    Volume(LogicalPath<'a>),
    /// Something on a mounted volume
    Path(LogicalPath<'a>),
}

/// Filesystem over a host with lettered volumes
#[derive(Debug, Clone, Default)]
pub struct MultiRootFs<P> {
    probe: P,
}

impl<P: VolumeProbe> MultiRootFs<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Volumes mounted right now
    pub fn volumes(&self) -> Result<VolumeSet, FsError> {
        self.query(Op::ReadDir, ROOT_MARKER)
    }

    fn query(&self, op: Op, name: &str) -> Result<VolumeSet, FsError> {
        VolumeSet::query(&self.probe).map_err(|e| {
            warn!("Volume query failed: {}", e);
            report(FsError::host(op, name, e))
        })
    }

    /// Validate `name` and classify it, checking the volume is mounted
    fn resolve<'a>(&self, op: Op, name: &'a str) -> Result<Target<'a>, FsError> {
        let path = LogicalPath::parse(name).ok_or_else(|| report(FsError::invalid(op, name)))?;
        if path.is_root() {
            trace!("{} {}: virtual root", op, name);
            return Ok(Target::Root);
        }

        let letter = path
            .volume()
            .ok_or_else(|| report(FsError::not_exist(op, name)))?;
        if !self.query(op, name)?.contains(letter) {
            return Err(report(FsError::not_exist(op, name)));
        }

        if path.is_bare_volume() {
            trace!("{} {}: volume {}:", op, name, letter);
            Ok(Target::Volume(path))
        } else {
            Ok(Target::Path(path))
        }
    }

    fn native(&self, op: Op, path: &LogicalPath<'_>) -> Result<NativePath, FsError> {
        let native = translators::multi_root(path)
            .ok_or_else(|| report(FsError::not_exist(op, path.as_str())))?;
        debug!("{} {} -> {}", op, path.as_str(), native);
        Ok(native)
    }
}

impl<P: VolumeProbe> FileSystem for MultiRootFs<P> {
    fn open(&self, name: &str) -> Result<OpenFile, FsError> {
        match self.resolve(Op::Open, name)? {
            Target::Root => {
                let volumes = self.query(Op::Open, name)?;
                debug!("open {}: volumes [{}]", name, volumes);
                Ok(OpenFile::Root(RootDir::new(volumes)))
            }
            Target::Volume(path) | Target::Path(path) => {
                let native = self.native(Op::Open, &path)?;
                host::open(&path, native)
            }
        }
    }

    fn stat(&self, name: &str) -> Result<Metadata, FsError> {
        match self.resolve(Op::Stat, name)? {
            Target::Root | Target::Volume(_) => {
                Ok(Metadata::Synthetic(SyntheticDirInfo::new(name)))
            }
            Target::Path(path) => {
                let native = self.native(Op::Stat, &path)?;
                host::stat(&path, &native)
            }
        }
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>, FsError> {
        match self.resolve(Op::ReadFile, name)? {
            Target::Root | Target::Volume(_) => {
                Err(report(FsError::is_directory(Op::ReadFile, name)))
            }
            Target::Path(path) => {
                let native = self.native(Op::ReadFile, &path)?;
                host::read_file(&path, &native)
            }
        }
    }

    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>, FsError> {
        match self.resolve(Op::ReadDir, name)? {
            Target::Root => Ok(self.query(Op::ReadDir, name)?.entries()),
            Target::Volume(path) | Target::Path(path) => {
                let native = self.native(Op::ReadDir, &path)?;
                host::read_dir(&path, &native)
            }
        }
    }
}
