//! # Record Layout
//!
//! The record is a single contiguous run of 26 bytes at the start of the
//! node's EEPROM.
//!
//! ## Memory Map
//!
//! ```text
//!        0           8          16          24          32
//!        +-----------+-----------+-----------+-----------+
//! 0x0000 | NetNumber                                     |
//!        +-----------+-----------+-----------+-----------+
//! 0x0004 | NodeNumber| NodeName                          |
//!        +-----------+                                   +
//! 0x0008 |                                               |
//! 0x000C |                                               |
//! 0x0010 |                                               |
//!        +                       +-----------+-----------+
//! 0x0014 |                       | Checksum              |
//!        +-----------+-----------+-----------+-----------+
//! 0x0018 | Checksum (cont.)      |
//!        +-----------+-----------+
//! ```
//!
//! ## Fields
//!
//! - `NetNumber`: network number (4 bytes, u32). Reserved, not yet used by
//!   the network stack.
//! - `NodeNumber`: node number within the network (1 byte, u8)
//! - `NodeName`: up to 16 characters followed by a NUL terminator, padded
//!   with NUL (17 bytes)
//! - `Checksum`: CRC over bytes `0x00..0x16` (4 bytes, u32)
//!
//! The byte order of `NetNumber` and `Checksum` is whatever the provisioning
//! tool uses, see [`ByteOrder`].

/// Starting point in EEPROM for the node configuration record
pub const POLYWOG_EEPROM_BASE: usize = 0;

/// Offset of the network number
pub const NET_NUMBER_OFFSET: usize = 0x00;

/// Offset of the node number
pub const NODE_NUMBER_OFFSET: usize = 0x04;

/// Offset of the node name field
pub const NODE_NAME_OFFSET: usize = 0x05;

/// Size of the node name field, terminator included
pub const NODE_NAME_FIELD_LEN: usize = 17;

/// Longest name that fits alongside its terminator
pub const NODE_NAME_MAX_LEN: usize = NODE_NAME_FIELD_LEN - 1;

/// Offset of the checksum
pub const CHECKSUM_OFFSET: usize = NODE_NAME_OFFSET + NODE_NAME_FIELD_LEN;

/// Number of leading bytes covered by the checksum
pub const CHECKED_LEN: usize = CHECKSUM_OFFSET;

/// Total record size in bytes
pub const RECORD_SIZE: usize = CHECKSUM_OFFSET + 4;

/// Byte order of the 32-bit fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Decode a u32 stored in this byte order
    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Encode a u32 in this byte order
    pub fn write_u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        assert_eq!(NODE_NAME_MAX_LEN, 16);
        assert_eq!(CHECKSUM_OFFSET, 22);
        assert_eq!(CHECKED_LEN, 22);
        assert_eq!(RECORD_SIZE, 26);
    }

    #[test]
    fn test_byte_order() {
        assert_eq!(ByteOrder::Little.write_u32(0x0102_0304), [4, 3, 2, 1]);
        assert_eq!(ByteOrder::Big.write_u32(0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(ByteOrder::Big.read_u32([0xDE, 0xAD, 0xBE, 0xEF]), 0xDEAD_BEEF);
        assert_eq!(ByteOrder::Little.read_u32([0xEF, 0xBE, 0xAD, 0xDE]), 0xDEAD_BEEF);
    }
}
