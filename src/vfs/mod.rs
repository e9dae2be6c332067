//! Read-only filesystem over the host
//!
//! Two implementations of the same `FileSystem` contract: one for hosts with
//! a single root and one for hosts with lettered volumes.

pub mod handle;
mod host;
pub mod multi_root;
pub mod results;
pub mod single_root;
pub mod traits;

pub use handle::{HostFile, OpenFile, RootDir};
pub use multi_root::MultiRootFs;
pub use results::{
    DirBatch, DirEntry, FileMode, HostEntry, Metadata, SyntheticDirInfo, SyntheticEntry,
};
pub use single_root::SingleRootFs;
pub use traits::FileSystem;
