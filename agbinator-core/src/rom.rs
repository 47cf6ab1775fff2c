//! Immutable in-memory ROM image.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::AnalysisError;

/// Smallest accepted image: the cartridge header ends at 0xC0.
pub const MIN_ROM_SIZE: usize = 0xC0;

/// Largest accepted image: the full 32 MiB cartridge window.
pub const MAX_ROM_SIZE: usize = 0x200_0000;

/// A GBA ROM image held in memory.
///
/// The bytes are shared behind an `Arc`, so cloning is cheap and every
/// scanner can read the same buffer without copying it.
#[derive(Debug, Clone)]
pub struct RomImage {
    data: Arc<[u8]>,
}

impl RomImage {
    /// Wrap a byte buffer, checking the size bounds.
    pub fn new(data: impl Into<Vec<u8>>) -> Result<Self, AnalysisError> {
        let data = data.into();
        check_size(data.len() as u64)?;
        Ok(Self { data: data.into() })
    }

    /// Read a ROM file from disk.
    ///
    /// The file size is checked before the contents are read, so oversized
    /// inputs are rejected without loading them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();
        check_size(size)?;
        let data = std::fs::read(path)?;
        Self::new(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for RomImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for RomImage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

fn check_size(size: u64) -> Result<(), AnalysisError> {
    if size < MIN_ROM_SIZE as u64 {
        return Err(AnalysisError::TooSmall {
            expected: MIN_ROM_SIZE as u64,
            actual: size,
        });
    }
    if size > MAX_ROM_SIZE as u64 {
        return Err(AnalysisError::TooLarge {
            expected: MAX_ROM_SIZE as u64,
            actual: size,
        });
    }
    Ok(())
}

/// Read a little-endian `u16` at `offset`, or `None` if it runs past the end.
pub fn read_u16_le(buf: &[u8], offset: usize) -> Option<u16> {
    let bytes = buf.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read a little-endian `u32` at `offset`, or `None` if it runs past the end.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
#[path = "tests/rom_tests.rs"]
mod tests;
