//! Volume probes
//!
//! A probe reports which lettered volumes are mounted right now as a bitmask,
//! bit 0 being `A:`.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(windows)]
use windows_sys::Win32::Storage::FileSystem::GetLogicalDrives;

/// Source of the live mounted-volume bitmask
pub trait VolumeProbe: Send + Sync {
    fn mounted_mask(&self) -> io::Result<u32>;
}

impl<P: VolumeProbe + ?Sized> VolumeProbe for &P {
    fn mounted_mask(&self) -> io::Result<u32> {
        (**self).mounted_mask()
    }
}

impl<P: VolumeProbe + ?Sized> VolumeProbe for Arc<P> {
    fn mounted_mask(&self) -> io::Result<u32> {
        (**self).mounted_mask()
    }
}

/// Probe with a mask set by the caller.
///
/// Stands in for the host query where there is none, and lets tests mount
/// and unmount volumes between calls.
#[derive(Debug, Default)]
pub struct FixedVolumes {
    mask: AtomicU32,
}

impl FixedVolumes {
    pub fn new(mask: u32) -> Self {
        Self {
            mask: AtomicU32::new(mask),
        }
    }

    /// Build from volume letters, e.g. `"CD"`. Non-letters are ignored.
    pub fn from_letters(letters: &str) -> Self {
        let mask = letters
            .chars()
            .filter_map(letter_bit)
            .fold(0, |mask, bit| mask | bit);
        Self::new(mask)
    }

    pub fn set_mask(&self, mask: u32) {
        self.mask.store(mask, Ordering::SeqCst);
    }

    pub fn mount(&self, letter: char) {
        if let Some(bit) = letter_bit(letter) {
            self.mask.fetch_or(bit, Ordering::SeqCst);
        }
    }

    pub fn unmount(&self, letter: char) {
        if let Some(bit) = letter_bit(letter) {
            self.mask.fetch_and(!bit, Ordering::SeqCst);
        }
    }
}

impl VolumeProbe for FixedVolumes {
    fn mounted_mask(&self) -> io::Result<u32> {
        Ok(self.mask.load(Ordering::SeqCst))
    }
}

/// Mask bit for a volume letter (either case)
pub fn letter_bit(letter: char) -> Option<u32> {
    letter
        .is_ascii_alphabetic()
        .then(|| 1 << (letter.to_ascii_uppercase() as u32 - 'A' as u32))
}

/// Probe backed by the Windows logical drive query
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogicalDrives;

#[cfg(windows)]
impl VolumeProbe for LogicalDrives {
    fn mounted_mask(&self) -> io::Result<u32> {
        // SAFETY: takes no arguments and touches no caller memory.
        let mask = unsafe { GetLogicalDrives() };
        if mask == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(mask)
    }
}
