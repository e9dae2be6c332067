//! Path translators
//!
//! Map validated logical paths onto the paths the host actually consumes.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::path::LogicalPath;

/// Separator used by lettered-volume hosts
pub const VOLUME_SEPARATOR: char = '\\';

/// A host path produced from a logical path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativePath(PathBuf);

impl NativePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for NativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for NativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Translate for a host with a single root. Never fails.
pub fn single_root(root: &Path, path: &LogicalPath<'_>) -> NativePath {
    let native = path
        .segments()
        .fold(root.to_path_buf(), |acc, seg| acc.join(seg));
    NativePath(native)
}

/// Translate for a host with lettered volumes.
///
/// Returns `None` when the path has no `<letter>:` prefix.
pub fn multi_root(path: &LogicalPath<'_>) -> Option<NativePath> {
    if path.volume().is_none() {
        return None;
    }

    let mut native = path.as_str().replace('/', "\\");
    if path.is_bare_volume() {
        native.push(VOLUME_SEPARATOR);
    }
    Some(NativePath(PathBuf::from(native)))
}
