//! osfs - the host filesystem as a read-only, slash-rooted tree
//!
//! Callers address files with logical paths: forward-slash separated,
//! relative, never containing `.` or `..` segments, with `.` naming the root.
//! On hosts with a single root `.` is `/`. On hosts with lettered volumes
//! `.` is a virtual directory listing the mounted volumes and paths look like
//! `C:/Windows/system.ini`.

pub mod config;
pub mod error;
pub mod path;
pub mod utils;
pub mod vfs;
pub mod volumes;

pub use config::OsFsConfig;
pub use error::{ErrorKind, FsError, Op};
pub use path::{LogicalPath, NativePath, ROOT_MARKER, is_valid_path};
pub use vfs::{
    DirBatch, DirEntry, FileMode, FileSystem, Metadata, MultiRootFs, OpenFile, RootDir,
    SingleRootFs,
};
#[cfg(windows)]
pub use volumes::LogicalDrives;
pub use volumes::{FixedVolumes, VolumeProbe, VolumeSet};

/// Filesystem for the platform this crate was built for
#[cfg(windows)]
pub type OsFs = MultiRootFs<LogicalDrives>;

/// Filesystem for the platform this crate was built for
#[cfg(not(windows))]
pub type OsFs = SingleRootFs;

/// The whole host filesystem
#[cfg(windows)]
pub fn os_root_fs() -> OsFs {
    MultiRootFs::new(LogicalDrives)
}

/// The whole host filesystem
#[cfg(not(windows))]
pub fn os_root_fs() -> OsFs {
    SingleRootFs::new()
}
