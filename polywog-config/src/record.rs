//! Node configuration record and its byte codec

use crate::crc::RecordChecksum;
use crate::error::ConfigError;
use crate::layout::{
    ByteOrder, CHECKED_LEN, CHECKSUM_OFFSET, NET_NUMBER_OFFSET, NODE_NAME_FIELD_LEN,
    NODE_NAME_OFFSET, NODE_NUMBER_OFFSET, RECORD_SIZE,
};
use crate::name::NodeName;

/// Network identity of a node
///
/// The checksum is not kept here: it belongs to the stored image and is
/// verified by [`RecordCodec::decode`] and produced by
/// [`RecordCodec::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeConfigRecord {
    /// Network number (reserved, unused by the network stack for now)
    pub net_number: u32,
    /// Node number within the network
    pub node_number: u8,
    /// Display name
    pub node_name: NodeName,
}

impl NodeConfigRecord {
    pub const fn new(net_number: u32, node_number: u8, node_name: NodeName) -> Self {
        Self {
            net_number,
            node_number,
            node_name,
        }
    }
}

/// Converts records to and from their EEPROM image
///
/// Byte order and checksum algorithm must match the provisioning tool.
#[derive(Debug, Clone, Copy)]
pub struct RecordCodec<C> {
    byte_order: ByteOrder,
    checksum: C,
}

impl<C> RecordCodec<C> {
    pub const fn new(byte_order: ByteOrder, checksum: C) -> Self {
        Self {
            byte_order,
            checksum,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
}

impl<C: RecordChecksum> RecordCodec<C> {
    /// Build the complete image, checksum included
    pub fn encode(&self, record: &NodeConfigRecord) -> [u8; RECORD_SIZE] {
        let mut image = [0u8; RECORD_SIZE];

        image[NET_NUMBER_OFFSET..NODE_NUMBER_OFFSET]
            .copy_from_slice(&self.byte_order.write_u32(record.net_number));
        image[NODE_NUMBER_OFFSET] = record.node_number;
        image[NODE_NAME_OFFSET..CHECKSUM_OFFSET].copy_from_slice(&record.node_name.encode());

        let checksum = self.computed_checksum(&image);
        image[CHECKSUM_OFFSET..RECORD_SIZE].copy_from_slice(&self.byte_order.write_u32(checksum));

        image
    }

    /// Validate and decode an image
    ///
    /// The checksum is checked before anything else, so any damage to the
    /// covered bytes reports [`ConfigError::Corrupt`]. Only a record with a
    /// good checksum can be [`ConfigError::Malformed`].
    pub fn decode(&self, image: &[u8; RECORD_SIZE]) -> Result<NodeConfigRecord, ConfigError> {
        if self.stored_checksum(image) != self.computed_checksum(image) {
            return Err(ConfigError::Corrupt);
        }

        let net_number = self.byte_order.read_u32(field(image, NET_NUMBER_OFFSET));
        let node_number = image[NODE_NUMBER_OFFSET];
        let node_name = NodeName::decode(&field(image, NODE_NAME_OFFSET))?;

        Ok(NodeConfigRecord {
            net_number,
            node_number,
            node_name,
        })
    }

    /// Checksum as stored in the image
    pub fn stored_checksum(&self, image: &[u8; RECORD_SIZE]) -> u32 {
        self.byte_order.read_u32(field(image, CHECKSUM_OFFSET))
    }

    /// Checksum recomputed over the covered bytes of the image
    pub fn computed_checksum(&self, image: &[u8; RECORD_SIZE]) -> u32 {
        self.checksum.checksum(&image[..CHECKED_LEN])
    }
}

/// Copy a fixed-size field out of the image
fn field<const N: usize>(image: &[u8; RECORD_SIZE], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&image[offset..offset + N]);
    out
}

// Every field ends inside the record
const _: () = assert!(NODE_NAME_OFFSET + NODE_NAME_FIELD_LEN + 4 == RECORD_SIZE);
