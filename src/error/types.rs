//! Error types
//!
//! Defines the error taxonomy shared by both filesystem variants. Every error
//! carries the operation and the caller's logical path, never the native one.

use std::fmt;
use std::io;

/// Filesystem operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Open,
    Stat,
    ReadFile,
    ReadDir,
    Read,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Open => "open",
            Op::Stat => "stat",
            Op::ReadFile => "readfile",
            Op::ReadDir => "readdir",
            Op::Read => "read",
        };
        f.write_str(name)
    }
}

/// What went wrong
#[derive(Debug)]
pub enum ErrorKind {
    /// Malformed logical path. Always a caller bug.
    InvalidPath,
    /// Well-formed path that names nothing reachable.
    NotExist,
    /// File content was requested from a directory.
    IsDirectory,
    /// The handle was already closed.
    Closed,
    /// Opaque pass-through of a host I/O failure.
    Host(io::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidPath => write!(f, "invalid argument"),
            ErrorKind::NotExist => write!(f, "file does not exist"),
            ErrorKind::IsDirectory => write!(f, "is a directory"),
            ErrorKind::Closed => write!(f, "file already closed"),
            ErrorKind::Host(e) => write!(f, "{}", e),
        }
    }
}

/// Error returned by every filesystem operation
#[derive(Debug)]
pub struct FsError {
    op: Op,
    path: String,
    kind: ErrorKind,
}

impl FsError {
    pub fn new(op: Op, path: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            op,
            path: path.into(),
            kind,
        }
    }

    pub fn invalid(op: Op, path: &str) -> Self {
        Self::new(op, path, ErrorKind::InvalidPath)
    }

    pub fn not_exist(op: Op, path: &str) -> Self {
        Self::new(op, path, ErrorKind::NotExist)
    }

    pub fn is_directory(op: Op, path: &str) -> Self {
        Self::new(op, path, ErrorKind::IsDirectory)
    }

    pub fn closed(op: Op, path: &str) -> Self {
        Self::new(op, path, ErrorKind::Closed)
    }

    pub fn host(op: Op, path: &str, error: io::Error) -> Self {
        Self::new(op, path, ErrorKind::Host(error))
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// The logical path the caller supplied
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidPath)
    }

    /// True for this layer's not-exist and for a host "not found".
    pub fn is_not_exist(&self) -> bool {
        match &self.kind {
            ErrorKind::NotExist => true,
            ErrorKind::Host(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    pub fn is_dir_error(&self) -> bool {
        match &self.kind {
            ErrorKind::IsDirectory => true,
            ErrorKind::Host(e) => e.kind() == io::ErrorKind::IsADirectory,
            _ => false,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self.kind, ErrorKind::Host(_))
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.op, self.path, self.kind)
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Host(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FsError> for io::Error {
    fn from(error: FsError) -> Self {
        let kind = match &error.kind {
            ErrorKind::InvalidPath => io::ErrorKind::InvalidInput,
            ErrorKind::NotExist => io::ErrorKind::NotFound,
            ErrorKind::IsDirectory => io::ErrorKind::IsADirectory,
            ErrorKind::Closed => io::ErrorKind::Other,
            ErrorKind::Host(e) => e.kind(),
        };
        io::Error::new(kind, error)
    }
}
