//! Record checksum
//!
//! The algorithm is defined by the provisioning side, not by this crate.
//! Anything implementing [`RecordChecksum`] can be plugged into a
//! [`RecordCodec`](crate::RecordCodec), including plain closures.

/// Checksum over the leading bytes of a record
pub trait RecordChecksum {
    /// Compute the checksum of `data`
    fn checksum(&self, data: &[u8]) -> u32;
}

impl<F> RecordChecksum for F
where
    F: Fn(&[u8]) -> u32,
{
    fn checksum(&self, data: &[u8]) -> u32 {
        self(data)
    }
}

/// CRC-32 as used by Ethernet and zlib
///
/// Reflected polynomial `0xEDB88320`, initial value `0xFFFFFFFF`, output
/// inverted. Only used when the provisioning tool is known to use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc32Ieee;

impl RecordChecksum for Crc32Ieee {
    fn checksum(&self, data: &[u8]) -> u32 {
        !crc32_update(0xFFFF_FFFF, data)
    }
}

/// Bitwise CRC-32 update (IEEE 802.3 polynomial)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(Crc32Ieee.checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_empty() {
        assert_eq!(Crc32Ieee.checksum(&[]), 0);
    }

    #[test]
    fn test_crc32_zeros_nonzero() {
        // Blank EEPROM must never look like a valid record
        assert_ne!(Crc32Ieee.checksum(&[0u8; 22]), 0);
    }

    #[test]
    fn test_closure_checksum() {
        let sum = |data: &[u8]| data.iter().fold(0u32, |acc, &b| acc.wrapping_add(b as u32));
        assert_eq!(sum.checksum(&[1, 2, 3]), 6);
    }
}
