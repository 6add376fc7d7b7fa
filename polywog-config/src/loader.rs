//! Configuration loading
//!
//! Reads the node configuration record from EEPROM at startup. There is no
//! fallback here: a node without a valid record has no identity, and the
//! caller decides what to do about it.

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};

use polywog_hal::EepromRead;

use crate::crc::RecordChecksum;
use crate::error::ConfigError;
use crate::layout::{POLYWOG_EEPROM_BASE, RECORD_SIZE};
use crate::record::{NodeConfigRecord, RecordCodec};

/// Load and validate the node configuration record
///
/// Performs a single read of [`RECORD_SIZE`] bytes at
/// [`POLYWOG_EEPROM_BASE`] and decodes it with `codec`.
///
/// # Errors
/// - [`ConfigError::Storage`] if the EEPROM read fails
/// - [`ConfigError::Corrupt`] if the checksum does not match, which is also
///   what an unprovisioned EEPROM looks like
/// - [`ConfigError::Malformed`] if the name field is not terminated
pub fn load<S, C>(storage: &mut S, codec: &RecordCodec<C>) -> Result<NodeConfigRecord, ConfigError>
where
    S: EepromRead + ?Sized,
    C: RecordChecksum,
{
    #[cfg(feature = "defmt")]
    debug!(
        "Reading node configuration ({} bytes at {})",
        RECORD_SIZE, POLYWOG_EEPROM_BASE
    );

    let mut image = [0u8; RECORD_SIZE];
    storage.read(POLYWOG_EEPROM_BASE, &mut image)?;

    let result = codec.decode(&image);

    #[cfg(feature = "defmt")]
    match &result {
        Ok(record) => info!(
            "Node configuration loaded: node {} \"{}\" on network {}",
            record.node_number, record.node_name, record.net_number
        ),
        Err(ConfigError::Corrupt) => warn!(
            "Node configuration checksum mismatch: stored {=u32:#x}, computed {=u32:#x}",
            codec.stored_checksum(&image),
            codec.computed_checksum(&image)
        ),
        Err(e) => warn!("Node configuration invalid: {}", e),
    }

    result
}

impl NodeConfigRecord {
    /// Load the record from EEPROM, see [`load`]
    pub fn load<S, C>(storage: &mut S, codec: &RecordCodec<C>) -> Result<Self, ConfigError>
    where
        S: EepromRead + ?Sized,
        C: RecordChecksum,
    {
        load(storage, codec)
    }
}

#[cfg(test)]
mod tests {
    use polywog_hal::{EepromError, MemoryEeprom};

    use super::*;
    use crate::crc::Crc32Ieee;
    use crate::layout::ByteOrder;
    use crate::name::NodeName;

    const CODEC: RecordCodec<Crc32Ieee> = RecordCodec::new(ByteOrder::Little, Crc32Ieee);

    fn provisioned(record: &NodeConfigRecord) -> MemoryEeprom<64> {
        let mut eeprom = MemoryEeprom::erased();
        eeprom
            .write(POLYWOG_EEPROM_BASE, &CODEC.encode(record))
            .unwrap();
        eeprom
    }

    /// Driver that always fails
    struct BrokenBus;

    impl EepromRead for BrokenBus {
        fn capacity(&self) -> usize {
            1024
        }

        fn read(&mut self, _offset: usize, _buf: &mut [u8]) -> Result<(), EepromError> {
            Err(EepromError::Device)
        }
    }

    #[test]
    fn test_load_provisioned() {
        let record = NodeConfigRecord::new(1, 7, NodeName::new("node-07").unwrap());
        let mut eeprom = provisioned(&record);

        assert_eq!(load(&mut eeprom, &CODEC), Ok(record));
    }

    #[test]
    fn test_load_ignores_bytes_after_record() {
        let record = NodeConfigRecord::new(0, 12, NodeName::new("well").unwrap());
        let mut eeprom = provisioned(&record);
        eeprom.write(RECORD_SIZE, &[0xAB; 8]).unwrap();

        assert_eq!(NodeConfigRecord::load(&mut eeprom, &CODEC), Ok(record));
    }

    #[test]
    fn test_load_factory_fresh() {
        let mut eeprom = MemoryEeprom::<64>::erased();
        assert_eq!(load(&mut eeprom, &CODEC), Err(ConfigError::Corrupt));
    }

    #[test]
    fn test_load_blank() {
        let mut eeprom = MemoryEeprom::<64>::blank();
        assert_eq!(load(&mut eeprom, &CODEC), Err(ConfigError::Corrupt));
    }

    #[test]
    fn test_load_device_too_small() {
        let mut eeprom = MemoryEeprom::<16>::blank();
        assert_eq!(
            load(&mut eeprom, &CODEC),
            Err(ConfigError::Storage(EepromError::OutOfBounds))
        );
    }

    #[test]
    fn test_load_bus_failure() {
        assert_eq!(
            load(&mut BrokenBus, &CODEC),
            Err(ConfigError::Storage(EepromError::Device))
        );
    }

    #[test]
    fn test_load_through_trait_object() {
        let record = NodeConfigRecord::new(2, 3, NodeName::new("dyn").unwrap());
        let mut eeprom = provisioned(&record);
        let storage: &mut dyn EepromRead = &mut eeprom;

        assert_eq!(load(storage, &CODEC), Ok(record));
    }
}
