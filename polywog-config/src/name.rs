//! Node name field
//!
//! Stored as 17 bytes: up to 16 characters, a NUL terminator, and NUL
//! padding after it.

use core::fmt;

use heapless::Vec;

use crate::error::{ConfigError, NameError};
use crate::layout::{NODE_NAME_FIELD_LEN, NODE_NAME_MAX_LEN};

/// Field terminator
const NUL: u8 = 0;

/// Human-readable node name, at most 16 bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeName {
    bytes: Vec<u8, NODE_NAME_MAX_LEN>,
}

impl NodeName {
    /// Create a name from text
    pub fn new(name: &str) -> Result<Self, NameError> {
        Self::from_bytes(name.as_bytes())
    }

    /// Create a name from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NameError> {
        if bytes.contains(&NUL) {
            return Err(NameError::EmbeddedNul);
        }
        let bytes = Vec::from_slice(bytes).map_err(|_| NameError::TooLong)?;
        Ok(Self { bytes })
    }

    /// Decode the 17-byte field
    ///
    /// The name ends at the first NUL. A field with no NUL at all is
    /// [`ConfigError::Malformed`].
    pub fn decode(field: &[u8; NODE_NAME_FIELD_LEN]) -> Result<Self, ConfigError> {
        let end = field
            .iter()
            .position(|&b| b == NUL)
            .ok_or(ConfigError::Malformed)?;
        let bytes = Vec::from_slice(&field[..end]).map_err(|_| ConfigError::Malformed)?;
        Ok(Self { bytes })
    }

    /// Encode into the 17-byte field, NUL padded
    pub fn encode(&self) -> [u8; NODE_NAME_FIELD_LEN] {
        let mut field = [NUL; NODE_NAME_FIELD_LEN];
        field[..self.bytes.len()].copy_from_slice(&self.bytes);
        field
    }

    /// Raw name bytes, without terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Name as text, if the provisioned bytes are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl TryFrom<&str> for NodeName {
    type Error = NameError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

/// Printable ASCII as-is, anything else as `\xNN`
impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes.iter() {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NodeName {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]:a}", self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_bytes(self.as_bytes()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NodeName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> serde::de::Visitor<'de> for NameVisitor {
            type Value = NodeName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a node name of at most 16 bytes without NUL")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<NodeName, E> {
                NodeName::new(v).map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<NodeName, E> {
                NodeName::from_bytes(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
