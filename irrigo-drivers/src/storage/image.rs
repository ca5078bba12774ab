//! RAM-backed EEPROM image
//!
//! Parts without a real EEPROM keep the settings bytes in RAM and persist
//! the whole image to flash. The image tracks whether any byte actually
//! changed since the last persist so the firmware only writes flash when
//! needed.

use irrigo_hal::Eeprom;

/// In-memory EEPROM of `N` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EepromImage<const N: usize> {
    bytes: [u8; N],
    dirty: bool,
}

impl<const N: usize> Default for EepromImage<N> {
    fn default() -> Self {
        Self::erased()
    }
}

impl<const N: usize> EepromImage<N> {
    /// Create an image with every byte erased (`0xFF`)
    pub const fn erased() -> Self {
        Self {
            bytes: [0xFF; N],
            dirty: false,
        }
    }

    /// Create an image from persisted contents
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self {
            bytes,
            dirty: false,
        }
    }

    /// Restore from a persisted record
    ///
    /// Missing trailing bytes stay erased; extra bytes are ignored.
    pub fn load(data: &[u8]) -> Self {
        let mut image = Self::erased();
        let len = data.len().min(N);
        image.bytes[..len].copy_from_slice(&data[..len]);
        image
    }

    /// Raw contents
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// True if a byte changed since the last [`EepromImage::mark_clean`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record that the current contents have been persisted
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl<const N: usize> Eeprom for EepromImage<N> {
    fn len(&self) -> usize {
        N
    }

    fn read(&self, address: usize) -> u8 {
        self.bytes.get(address).copied().unwrap_or(0xFF)
    }

    fn update(&mut self, address: usize, value: u8) {
        if let Some(cell) = self.bytes.get_mut(address) {
            if *cell != value {
                *cell = value;
                self.dirty = true;
            }
        }
    }
}
