//! Configuration errors

use core::fmt;

use polywog_hal::EepromError;

/// Errors from loading the node configuration record
///
/// Every variant means the node has no usable identity. What to do about
/// it (halt, fall back, ask for provisioning) is up to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Stored checksum does not match the record contents. The EEPROM is
    /// corrupted or was never provisioned.
    Corrupt,
    /// Node name field has no terminator within its 17 bytes
    Malformed,
    /// The EEPROM could not be read
    Storage(EepromError),
}

impl From<EepromError> for ConfigError {
    fn from(e: EepromError) -> Self {
        ConfigError::Storage(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupt => write!(f, "Checksum mismatch, configuration corrupt or not provisioned"),
            Self::Malformed => write!(f, "Node name is not terminated"),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

/// Errors from building a [`NodeName`](crate::NodeName)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NameError {
    /// Name is longer than 16 bytes
    TooLong,
    /// Name contains a NUL byte, which would end it early
    EmbeddedNul,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "Node name longer than 16 bytes"),
            Self::EmbeddedNul => write!(f, "Node name contains a NUL byte"),
        }
    }
}
