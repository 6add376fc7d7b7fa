//! In-memory EEPROM image
//!
//! Used on the host to build provisioning images and to exercise
//! configuration loading without hardware.

use crate::eeprom::{check_range, EepromError, EepromRead};

/// Value of an erased EEPROM cell
pub const ERASED_BYTE: u8 = 0xFF;

/// EEPROM backed by a byte array of `N` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEeprom<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> Default for MemoryEeprom<N> {
    fn default() -> Self {
        Self::erased()
    }
}

impl<const N: usize> MemoryEeprom<N> {
    /// Wrap an existing image
    pub const fn new(cells: [u8; N]) -> Self {
        Self { cells }
    }

    /// Factory-fresh device, every cell erased
    pub const fn erased() -> Self {
        Self {
            cells: [ERASED_BYTE; N],
        }
    }

    /// Device with every cell cleared to zero
    pub const fn blank() -> Self {
        Self { cells: [0; N] }
    }

    /// Copy `data` into the image at `offset`
    pub fn write(&mut self, offset: usize, data: &[u8]) -> Result<(), EepromError> {
        check_range(N, offset, data.len())?;
        self.cells[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Raw view of the whole image
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.cells
    }
}

impl<const N: usize> EepromRead for MemoryEeprom<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<(), EepromError> {
        check_range(N, offset, buf.len())?;
        buf.copy_from_slice(&self.cells[offset..offset + buf.len()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erased_reads_ff() {
        let mut eeprom = MemoryEeprom::<8>::erased();
        let mut buf = [0u8; 4];
        eeprom.read(2, &mut buf).unwrap();
        assert_eq!(buf, [ERASED_BYTE; 4]);
    }

    #[test]
    fn test_write_then_read() {
        let mut eeprom = MemoryEeprom::<16>::blank();
        eeprom.write(4, &[1, 2, 3]).unwrap();

        let mut buf = [0u8; 5];
        eeprom.read(3, &mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_read_past_end() {
        let mut eeprom = MemoryEeprom::<16>::blank();
        let mut buf = [0u8; 4];
        assert_eq!(eeprom.read(13, &mut buf), Err(EepromError::OutOfBounds));
    }

    #[test]
    fn test_write_past_end_leaves_image_untouched() {
        let mut eeprom = MemoryEeprom::<4>::blank();
        assert_eq!(eeprom.write(2, &[9, 9, 9]), Err(EepromError::OutOfBounds));
        assert_eq!(eeprom.as_bytes(), &[0; 4]);
    }

    #[test]
    fn test_read_through_mut_ref() {
        fn first_two<R: EepromRead>(mut reader: R) -> [u8; 2] {
            let mut buf = [0u8; 2];
            reader.read(0, &mut buf).unwrap();
            buf
        }

        let mut eeprom = MemoryEeprom::new([7u8; 4]);
        assert_eq!(first_two(&mut eeprom), [7, 7]);
        assert_eq!(eeprom.capacity(), 4);
    }
}
