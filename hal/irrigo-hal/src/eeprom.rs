//! Byte-addressed settings memory
//!
//! Models a small EEPROM: every byte is individually readable and
//! writable. Writes are "update" writes that leave the cell alone when it
//! already holds the value, which is what keeps wear down on real parts.

/// Byte-addressed non-volatile memory
pub trait Eeprom {
    /// Number of addressable bytes
    fn len(&self) -> usize;

    /// Check if the memory has no addressable bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one byte
    ///
    /// Addresses past [`Eeprom::len`] read as erased (`0xFF`).
    fn read(&self, address: usize) -> u8;

    /// Write one byte, skipping the write if the cell already matches
    ///
    /// Addresses past [`Eeprom::len`] are ignored.
    fn update(&mut self, address: usize, value: u8);

    /// Read a little-endian 16-bit word
    fn read_u16(&self, address: usize) -> u16 {
        u16::from_le_bytes([self.read(address), self.read(address + 1)])
    }

    /// Update a little-endian 16-bit word byte by byte
    fn update_u16(&mut self, address: usize, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.update(address, lo);
        self.update(address + 1, hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Array-backed EEPROM counting physical writes
    struct CountingEeprom {
        cells: [u8; 8],
        writes: usize,
    }

    impl Eeprom for CountingEeprom {
        fn len(&self) -> usize {
            self.cells.len()
        }

        fn read(&self, address: usize) -> u8 {
            self.cells.get(address).copied().unwrap_or(0xFF)
        }

        fn update(&mut self, address: usize, value: u8) {
            if let Some(cell) = self.cells.get_mut(address) {
                if *cell != value {
                    *cell = value;
                    self.writes += 1;
                }
            }
        }
    }

    fn erased() -> CountingEeprom {
        CountingEeprom {
            cells: [0xFF; 8],
            writes: 0,
        }
    }

    #[test]
    fn test_word_is_little_endian() {
        let mut eeprom = erased();
        eeprom.update_u16(2, 0x1234);
        assert_eq!(eeprom.read(2), 0x34);
        assert_eq!(eeprom.read(3), 0x12);
        assert_eq!(eeprom.read_u16(2), 0x1234);
    }

    #[test]
    fn test_update_skips_unchanged_bytes() {
        let mut eeprom = erased();
        eeprom.update_u16(0, 0x00FF);
        // High byte already erased
        assert_eq!(eeprom.writes, 1);
        eeprom.update_u16(0, 0x00FF);
        assert_eq!(eeprom.writes, 1);
    }

    #[test]
    fn test_out_of_range_reads_erased() {
        let mut eeprom = erased();
        eeprom.update(8, 0);
        assert_eq!(eeprom.writes, 0);
        assert_eq!(eeprom.read_u16(7), 0xFFFF);
        assert!(!eeprom.is_empty());
    }
}
