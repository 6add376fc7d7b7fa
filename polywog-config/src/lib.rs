//! Node configuration record for Polywog network nodes
//!
//! All nodes run the same firmware image. Each node learns its network
//! identity at startup from a small record provisioned into its own EEPROM:
//!
//! - Network number (reserved, currently unused)
//! - Node number, unique within the network
//! - Node name, up to 16 characters
//! - Checksum over the above, so blank or damaged EEPROM is never mistaken
//!   for a real identity
//!
//! The checksum algorithm and the byte order of the 32-bit fields are set
//! by whoever provisions the nodes, so both are supplied through a
//! [`RecordCodec`] rather than fixed here.
//!
//! ```
//! use polywog_config::{load, ByteOrder, Crc32Ieee, NodeConfigRecord, NodeName, RecordCodec};
//! use polywog_config::POLYWOG_EEPROM_BASE;
//! use polywog_hal::MemoryEeprom;
//!
//! let codec = RecordCodec::new(ByteOrder::Little, Crc32Ieee);
//! let record = NodeConfigRecord::new(1, 7, NodeName::new("node-07").unwrap());
//!
//! let mut eeprom = MemoryEeprom::<64>::erased();
//! eeprom.write(POLYWOG_EEPROM_BASE, &codec.encode(&record)).unwrap();
//!
//! let loaded = load(&mut eeprom, &codec).unwrap();
//! assert_eq!(loaded.node_number, 7);
//! assert_eq!(loaded.node_name.as_str(), Some("node-07"));
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod crc;
pub mod error;
pub mod layout;
pub mod loader;
pub mod name;
pub mod record;

pub use crc::{Crc32Ieee, RecordChecksum};
pub use error::{ConfigError, NameError};
pub use layout::{ByteOrder, POLYWOG_EEPROM_BASE, RECORD_SIZE};
pub use loader::load;
pub use name::NodeName;
pub use record::{NodeConfigRecord, RecordCodec};
