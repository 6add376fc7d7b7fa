//! EEPROM storage abstractions
//!
//! Provides the byte-range reader that configuration code uses to fetch
//! records from a node's EEPROM. Physical addressing (page size, bus
//! protocol, write cycles) is the driver's concern.

use core::fmt;

/// Errors from EEPROM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError {
    /// Requested range extends past the end of the device
    OutOfBounds,
    /// The driver reported a device or bus failure
    Device,
}

impl fmt::Display for EepromError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "EEPROM read out of bounds"),
            Self::Device => write!(f, "EEPROM device error"),
        }
    }
}

/// Byte-addressable EEPROM reader
///
/// Reads are short, bounded and blocking. Implementations take `&mut self`
/// since most buses need exclusive access for a transfer.
pub trait EepromRead {
    /// Total addressable size in bytes
    fn capacity(&self) -> usize;

    /// Fill `buf` with the bytes starting at `offset`
    ///
    /// # Arguments
    /// * `offset` - Byte address to start reading from
    /// * `buf` - Buffer to read into; its length is the number of bytes read
    ///
    /// # Errors
    /// [`EepromError::OutOfBounds`] if `offset + buf.len()` exceeds
    /// [`capacity`](Self::capacity).
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<(), EepromError>;
}

impl<T: EepromRead + ?Sized> EepromRead for &mut T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<(), EepromError> {
        (**self).read(offset, buf)
    }
}

/// Check that `len` bytes at `offset` fit inside a device of `capacity` bytes
pub fn check_range(capacity: usize, offset: usize, len: usize) -> Result<(), EepromError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(EepromError::OutOfBounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_within_capacity() {
        assert_eq!(check_range(26, 0, 26), Ok(()));
        assert_eq!(check_range(64, 10, 0), Ok(()));
    }

    #[test]
    fn test_check_range_past_end() {
        assert_eq!(check_range(16, 0, 17), Err(EepromError::OutOfBounds));
        assert_eq!(check_range(16, 16, 1), Err(EepromError::OutOfBounds));
    }

    #[test]
    fn test_check_range_overflow() {
        assert_eq!(check_range(16, usize::MAX, 2), Err(EepromError::OutOfBounds));
    }
}
