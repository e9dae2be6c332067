//! Lettered volume emulation
//!
//! Turns the live mounted-volume bitmask into the entries of the virtual
//! root directory.

pub mod probe;

use std::fmt;
use std::io;

use crate::vfs::{DirEntry, SyntheticEntry};

#[cfg(windows)]
pub use probe::LogicalDrives;
pub use probe::{FixedVolumes, VolumeProbe};

/// Number of lettered volumes, `A:` through `Z:`
pub const VOLUME_COUNT: u32 = 26;

const VOLUME_BITS: u32 = (1 << VOLUME_COUNT) - 1;

/// Snapshot of the volumes mounted at query time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeSet {
    mask: u32,
}

impl VolumeSet {
    /// Build from a probe mask. Bits above `Z` are ignored.
    pub fn from_mask(mask: u32) -> Self {
        Self {
            mask: mask & VOLUME_BITS,
        }
    }

    /// Query the probe for the volumes mounted right now
    pub fn query<P: VolumeProbe + ?Sized>(probe: &P) -> io::Result<Self> {
        probe.mounted_mask().map(Self::from_mask)
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Whether `letter` (either case) is mounted
    pub fn contains(&self, letter: char) -> bool {
        probe::letter_bit(letter).is_some_and(|bit| self.mask & bit != 0)
    }

    /// Mounted letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + use<> {
        let mask = self.mask;
        (0..VOLUME_COUNT)
            .filter(move |i| (mask >> i) & 1 != 0)
            .map(|i| (b'A' + i as u8) as char)
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// One synthetic directory entry per mounted volume, named like `C:`
    pub fn entries(&self) -> Vec<DirEntry> {
        self.iter()
            .map(|letter| DirEntry::Synthetic(SyntheticEntry::new(volume_name(letter))))
            .collect()
    }
}

impl fmt::Display for VolumeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(volume_name).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// Two-character volume name, e.g. `C:`
pub fn volume_name(letter: char) -> String {
    format!("{}:", letter.to_ascii_uppercase())
}
